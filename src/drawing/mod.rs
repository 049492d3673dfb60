//! Raster output.
//!
//! The composer only needs a [`Raster`]: something that can take a filled or outlined circle.
//! With the `drawing` feature, `image::RgbaImage` is one, drawing anti-aliased edges from the
//! shape's [`SDF`](crate::sdf::SDF).

use crate::{
  geometry::Point,
  palette::Color
};

#[cfg(feature = "drawing")] mod impl_draw_rgbaimage;
#[cfg(feature = "drawing")] pub mod render;
#[cfg(feature = "drawing")] pub mod source;
#[cfg(all(test, feature = "drawing"))] mod tests;

#[cfg(feature = "drawing")]
pub use impl_draw_rgbaimage::fill_shape;

/// A 2D raster circles can be drawn into.
pub trait Raster {
  fn draw_filled_circle(&mut self, center: Point, radius: f64, color: Color);
  fn draw_outlined_circle(&mut self, center: Point, radius: f64, color: Color, thickness: f64);
}

impl<R: Raster + ?Sized> Raster for &mut R {
  fn draw_filled_circle(&mut self, center: Point, radius: f64, color: Color) {
    (**self).draw_filled_circle(center, radius, color)
  }
  fn draw_outlined_circle(&mut self, center: Point, radius: f64, color: Color, thickness: f64) {
    (**self).draw_outlined_circle(center, radius, color, thickness)
  }
}
