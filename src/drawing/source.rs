//! Loading the photograph a palette is taken from.

use {
  std::path::Path,
  image::{RgbImage, imageops::FilterType, GenericImageView},
  crate::{error::Result, palette::Palette}
};

/// Open an image and scale it down, keeping its aspect ratio, until the longest edge is at
/// most `max_edge` pixels. Smaller images are left as they are.
pub fn load_image(path: impl AsRef<Path>, max_edge: u32) -> Result<RgbImage> {
  let path = path.as_ref();
  let image = image::open(path)?;
  let (width, height) = image.dimensions();
  tracing::info!(path = %path.display(), width, height, "image loaded");

  if width.max(height) <= max_edge {
    return Ok(image.into_rgb8());
  }
  let image = image.resize(max_edge, max_edge, FilterType::Triangle);
  tracing::info!(width = image.width(), height = image.height(), "image resized");
  Ok(image.into_rgb8())
}

/// Load a photograph and count its `max_colors` dominant colours.
pub fn palette_from_path(path: impl AsRef<Path>, max_edge: u32, max_colors: usize) -> Result<Palette> {
  let image = load_image(path, max_edge)?;
  let palette = crate::profile!("palette", Palette::from_image(&image, max_colors))?;
  palette.histogram().iter()
    .for_each(|row| tracing::debug!("{}", row));
  Ok(palette)
}
