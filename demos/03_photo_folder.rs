/// One fractal per photograph of a folder, each coloured by its own palette.
/// Photographs are processed in parallel.

use {
  circle_fractal::{
    config::FractalConfig,
    drawing::{render, source},
    palette::ColorSource,
  },
  anyhow::Result,
  std::path::{Path, PathBuf},
};

fn find_files(
  path: &str,
  filter: impl Fn(&str) -> bool
) -> impl Iterator<Item = PathBuf> {
  use walkdir::{WalkDir, DirEntry};

  WalkDir::new(path)
    .sort_by(|a, b| {
      let [a, b] = [a, b].map(|x| x.file_name().to_string_lossy().to_string());
      lexical_sort::lexical_cmp(&a, &b)
    })
    .into_iter()
    .filter_map(|entry| entry.ok())
    .map(|file: DirEntry| file.path().to_owned())
    .filter(move |file| file.file_name()
      .map(|name| filter(name.to_string_lossy().as_ref()))
      .unwrap_or(false))
}

fn main() -> Result<()> {
  use rayon::prelude::*;

  let image_folder = std::env::args().nth(1)
    .filter(|path| Path::new(path).is_dir())
    .expect("Please provide a valid folder path in arguments");
  let out_folder = Path::new("out");
  std::fs::create_dir_all(out_folder)?;

  let config = FractalConfig {
    output: "720x720".parse()?,
    max_depth: 5,
    ..Default::default()
  };
  let files = find_files(&image_folder, {
    let reg = regex::Regex::new("(?i)^.+\\.(jpe?g|png)$")?;
    move |file| reg.is_match(file)
  }).collect::<Vec<_>>();

  files.par_iter()
    .enumerate()
    .for_each(|(i, file)| {
      let ret = source::palette_from_path(file, config.input_max_edge, config.palette_colors)
        .and_then(|palette| {
          let palette = ColorSource::from(palette);
          render::render(&config, &palette, &palette, i as u64)
        })
        .and_then(|(image, _)| {
          let name = file.file_stem().unwrap_or_default().to_string_lossy();
          Ok(image.save(out_folder.join(format!("{}.png", name)))?)
        });
      match ret {
        Ok(()) => println!("{:?} -> done", file),
        Err(e) => println!("unable to process {:?}: {}", file, e)
      }
    });
  Ok(())
}
