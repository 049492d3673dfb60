#![allow(non_snake_case)]
use {
  euclid::{Box2D, Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    drawing::Raster,
    geometry::{PixelSpace, Point},
    palette::Color,
    sdf::{Disc, Ring, Shape}
  }
};

impl From<Color> for Rgba<u8> {
  fn from(Color([r, g, b]): Color) -> Self {
    Rgba([r, g, b, 255])
  }
}

impl Raster for RgbaImage {
  fn draw_filled_circle(&mut self, center: Point, radius: f64, color: Color) {
    fill_shape(self, &Disc::new(center, radius), color.into());
  }

  fn draw_outlined_circle(&mut self, center: Point, radius: f64, color: Color, thickness: f64) {
    fill_shape(self, &Ring::new(center, radius, thickness), color.into());
  }
}

/// Paint every pixel covered by `shape`, blending partially covered edge pixels.
pub fn fill_shape(image: &mut RgbaImage, shape: &impl Shape, color: Rgba<u8>) {
  let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
  let bounding_box = match clip_bounding_box(shape.bounding_box(), resolution) {
    Some(x) => x,
    None => return // bounding box has no intersection with the image at all
  };
  let Δp = 1.0;

  itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
    .map(|(y, x)| Point2D::<_, PixelSpace>::new(x, y))
    .for_each(|pixel| {
      // sample at the pixel center
      let sdf = shape.sdf(pixel.to_f64() + euclid::vec2(0.5, 0.5));
      if sdf >= 0.5 * Δp { return; }
      let px = image.get_pixel_mut(pixel.x, pixel.y);
      *px = sdf_overlay_aa(sdf, Δp, *px, color);
    });
}

fn clip_bounding_box(
  bounding_box: Box2D<f64, PixelSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  bounding_box
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f64()))
    .filter(|b| !b.is_empty())
    .map(|b| b.to_u32())
}

fn sdf_overlay_aa(sdf: f64, Δp: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  if alpha >= 1.0 && col2.0[3] == 255 {
    return col2;
  }
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}
