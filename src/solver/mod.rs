pub mod packer;
pub use packer::{Packer, PackStats};

pub mod fractal;
pub use fractal::Fractal;
