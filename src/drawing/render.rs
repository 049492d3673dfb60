//! Whole-image generation: background, root circle, composition.
//!
//! Independent fractals share nothing but their read-only colour sources, so
//! [`render_seeds`] draws them on rayon's thread pool, each into its own image with its
//! own generator.

use {
  euclid::point2,
  image::{Rgba, RgbaImage},
  rand::SeedableRng,
  rand_pcg::Pcg64,
  rayon::prelude::*,
  crate::{
    config::FractalConfig,
    error::Result,
    geometry::Circle,
    palette::ColorSource,
    solver::{Fractal, fractal::Colors},
    util
  }
};

/// Root circle centered in the output image.
pub fn root_circle(config: &FractalConfig) -> Circle {
  let (w, h) = (config.output.width as i32, config.output.height as i32);
  Circle::new(point2(w / 2, h / 2), config.root_radius())
}

/// Draw one fractal, seeded with `seed`.
pub fn render(
  config: &FractalConfig,
  parent: &ColorSource,
  child: &ColorSource,
  seed: u64
) -> Result<(RgbaImage, Circle)> {
  let fractal = Fractal::from_config(config)?;
  let (width, height) = (config.output.width, config.output.height);
  tracing::debug!(
    size = %config.output,
    buffer = %util::buffer_size(width, height, 4),
    seed, "allocating raster"
  );
  let mut image = RgbaImage::from_pixel(width, height, Rgba::from(config.background));
  let mut rng = Pcg64::seed_from_u64(seed);

  let tree = fractal.compose(
    &mut image,
    root_circle(config),
    config.num_circles,
    Colors { parent, child },
    &mut rng
  );
  tracing::info!(seed, circles = tree.descendants(), depth = tree.depth(), "fractal rendered");
  Ok((image, tree))
}

/// [`render`] once per seed, in parallel. Results are in the order of `seeds`.
pub fn render_seeds(
  config: &FractalConfig,
  parent: &ColorSource,
  child: &ColorSource,
  seeds: &[u64]
) -> Result<Vec<RgbaImage>> {
  config.validate()?;
  seeds.par_iter()
    .map(|&seed| render(config, parent, child, seed).map(|(image, _)| image))
    .collect()
}
