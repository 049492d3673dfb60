//! Recursive circle packing fractals.
//!
//! A root circle is packed with smaller non-overlapping circles, each of which is packed in
//! turn, down to a fixed depth. Colours are drawn from weighted palettes, usually the
//! dominant colours of a photograph, with the parent and child palettes swapping roles on
//! every level.
//!
//! The crate is split into [`solver`] for building the circle tree, and [`drawing`] for
//! putting it on a raster (the `RgbaImage` backend requires the `drawing` feature).
//!
//! # Basic usage
//! ```no_run
//! # use circle_fractal::{
//! #   error::Result,
//! #   geometry::Circle,
//! #   palette::{Color, ColorSource, Palette},
//! #   solver::{Fractal, fractal::Colors},
//! # };
//! # use {euclid::point2, rand::SeedableRng};
//! # fn main() -> Result<()> {
//! let mut image = image::RgbaImage::new(1080, 1080);
//!
//! // a palette maps colours to weights, e.g. pixel counts of a photograph
//! let warm = ColorSource::from(Palette::new([
//!   (Color([237, 220, 35]), 3u32),
//!   (Color([237, 133, 35]), 1),
//! ])?);
//! let cold = ColorSource::Fixed(Color([35, 133, 237]));
//!
//! // all randomness comes from the generator passed in: same seed, same fractal
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//!
//! let tree = Fractal::default().compose(
//!   &mut image,
//!   Circle::new(point2(540, 540), 432.0),
//!   2000, // circle budget of the root level
//!   Colors { parent: &warm, child: &cold },
//!   &mut rng
//! );
//! println!("{} circles", tree.descendants());
//! image.save("out.png")?;
//! #   Ok(())
//! # }
//! ```
//!
//! For whole images built from a [`FractalConfig`](config::FractalConfig), see
//! `drawing::render`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod geometry;
pub mod sdf;
pub mod solver;
pub mod palette;
pub mod config;
pub mod drawing;
pub mod util;

#[doc(hidden)]
pub use tracing;
