/// Two fixed colours, alternating on every level.
/// Simple imperative code style is shown.

use {
  circle_fractal::{
    geometry::Circle,
    palette::{Color, ColorSource},
    solver::{Fractal, Packer, fractal::Colors}
  },
  anyhow::Result,
  euclid::point2,
  image::{Rgba, RgbaImage},
  rand::SeedableRng
};

fn main() -> Result<()> {
  let path = "out.png";
  let mut image = RgbaImage::from_pixel(1080, 1080, Rgba([0, 0, 0, 255]));
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);

  let fractal = Fractal {
    packer: Packer::new(2.0, 1.0),
    max_radius_fraction: 0.75,
    max_depth: 7,
    child_fill: true,
    outline_thickness: 1.0
  };
  let yellow = ColorSource::Fixed(Color([237, 220, 35]));
  let blue = ColorSource::Fixed(Color([35, 133, 237]));

  let tree = fractal.compose(
    &mut image,
    Circle::new(point2(540, 540), 1080.0 / 2.5),
    2000,
    Colors { parent: &yellow, child: &blue },
    &mut rng
  );
  println!("{} circles, {} levels", tree.descendants(), tree.depth());

  image.save(path)?;
  open::that(path)?;
  Ok(())
}
