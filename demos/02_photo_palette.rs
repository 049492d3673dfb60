/// Colour a fractal with the dominant colours of a photograph.

use {
  circle_fractal::{
    config::FractalConfig,
    drawing::{render, source},
    palette::ColorSource,
  },
  anyhow::{Context, Result},
};

fn main() -> Result<()> {
  let photo = std::env::args().nth(1)
    .context("Please provide an image path in arguments")?;
  let path = "out.png";
  let config = FractalConfig {
    palette_colors: 41,
    max_depth: 7,
    seed: Some(0),
    ..Default::default()
  };

  let palette = ColorSource::from(
    source::palette_from_path(&photo, config.input_max_edge, config.palette_colors)?
  );
  let (image, tree) = render::render(&config, &palette, &palette, 0)?;
  println!("{} circles", tree.descendants());

  image.save(path)?;
  open::that(path)?;
  Ok(())
}
