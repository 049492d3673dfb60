//! Circle fractal generator.
//!
//! ```text
//! circle-fractal photo.jpg --out fractal.png
//! circle-fractal photo.jpg -k 8 -o 1920x1080 --seed 7 --variants 4
//! circle-fractal --parent-color "#eddc23" --child-color "#2385ed" -d 8
//! circle-fractal -c fractal.json --dump-config
//! ```

use {
  std::path::{Path, PathBuf},
  anyhow::{Context, Result, bail},
  clap::Parser,
  tracing_subscriber::{fmt, EnvFilter},
  circle_fractal::{
    config::{FractalConfig, OutputSize},
    drawing::{render, source},
    palette::{Color, ColorSource},
    profile
  }
};

#[derive(Parser, Debug)]
#[command(name = "circle-fractal")]
#[command(about = "Draw a fractal of packed circles, coloured from an image")]
struct Cli {
  /// Photograph the palette is taken from
  input: Option<PathBuf>,

  /// JSON file with fractal parameters; flags below override it
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Output image (png or jpeg)
  #[arg(long, default_value = "circle-fractal.png")]
  out: PathBuf,

  /// Number of colours to take from the photograph
  #[arg(short = 'k', long)]
  palette_colors: Option<usize>,

  /// Output image size, WIDTHxHEIGHT
  #[arg(short = 'o', long)]
  outdim: Option<OutputSize>,

  /// Longest edge the photograph is reduced to before counting colours
  #[arg(short = 'i', long)]
  indim: Option<u32>,

  /// Circle budget of the root level
  #[arg(short = 'n', long)]
  num_circles: Option<usize>,

  /// Recursion levels below the root
  #[arg(short = 'd', long)]
  max_depth: Option<usize>,

  /// RNG seed, random when absent
  #[arg(long)]
  seed: Option<u64>,

  /// Fixed colour of parent circles instead of the photograph's palette
  #[arg(long)]
  parent_color: Option<Color>,

  /// Fixed colour of child circles instead of the photograph's palette
  #[arg(long)]
  child_color: Option<Color>,

  /// Outline children instead of filling them
  #[arg(long)]
  outline: bool,

  /// Render this many fractals in parallel, with consecutive seeds
  #[arg(long, default_value_t = 1)]
  variants: usize,

  /// Print the effective configuration as JSON and exit
  #[arg(long)]
  dump_config: bool,

  /// Log filter, e.g. `info` or `circle_fractal=debug`
  #[arg(long, env = "RUST_LOG", default_value = "info")]
  log_level: String,
}

impl Cli {
  fn config(&self) -> Result<FractalConfig> {
    let mut config = match &self.config {
      Some(path) => FractalConfig::from_path(path)
        .with_context(|| format!("unable to load config {}", path.display()))?,
      None => FractalConfig::default()
    };
    if let Some(k) = self.palette_colors { config.palette_colors = k; }
    if let Some(size) = self.outdim { config.output = size; }
    if let Some(edge) = self.indim { config.input_max_edge = edge; }
    if let Some(n) = self.num_circles { config.num_circles = n; }
    if let Some(depth) = self.max_depth { config.max_depth = depth; }
    if self.seed.is_some() { config.seed = self.seed; }
    if self.outline { config.child_fill = false; }
    config.validate()?;
    Ok(config)
  }

  /// Fixed colours win over the photograph; a missing one falls back to its palette.
  fn color_sources(&self, config: &FractalConfig) -> Result<(ColorSource, ColorSource)> {
    let palette = match (&self.input, self.parent_color, self.child_color) {
      (_, Some(_), Some(_)) => None,
      (Some(path), _, _) => Some(ColorSource::from(
        source::palette_from_path(path, config.input_max_edge, config.palette_colors)
          .with_context(|| format!("unable to read palette from {}", path.display()))?
      )),
      (None, _, _) => bail!("an input image is required unless both --parent-color and --child-color are given"),
    };
    let pick = |fixed: Option<Color>| fixed.map(ColorSource::Fixed)
      .or_else(|| palette.clone())
      .context("no colour source");
    Ok((pick(self.parent_color)?, pick(self.child_color)?))
  }
}

fn output_path(out: &Path, index: usize, total: usize) -> PathBuf {
  if total <= 1 {
    return out.to_owned();
  }
  let stem = out.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
  let ext = out.extension().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "png".into());
  out.with_file_name(format!("{}_{}.{}", stem, index, ext))
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = EnvFilter::try_new(&cli.log_level)
    .unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .compact()
    .init();

  let config = cli.config()?;
  if cli.dump_config {
    println!("{}", serde_json::to_string_pretty(&config)?);
    return Ok(());
  }
  if cli.variants == 0 {
    bail!("--variants must be at least 1");
  }

  let (parent, child) = cli.color_sources(&config)?;
  let seed = config.seed.unwrap_or_else(rand::random);
  tracing::info!(
    seed, output = %config.output, circles = config.num_circles, depth = config.max_depth,
    "generating {} fractal(s)", cli.variants
  );

  let seeds = (0..cli.variants as u64)
    .map(|i| seed.wrapping_add(i))
    .collect::<Vec<_>>();
  let images = profile!("render", render::render_seeds(&config, &parent, &child, &seeds))?;

  for (i, image) in images.iter().enumerate() {
    let path = output_path(&cli.out, i, images.len());
    image.save(&path)
      .with_context(|| format!("unable to save {}", path.display()))?;
    tracing::info!(path = %path.display(), seed = seeds[i], "saved");
  }
  Ok(())
}
