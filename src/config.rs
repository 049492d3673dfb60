//! Fractal parameters, loadable from a JSON file.
//!
//! Every field has a default, so a config file only needs to list what it changes:
//! ```
//! # use circle_fractal::config::FractalConfig;
//! let config: FractalConfig = serde_json::from_str(r#"{ "max_depth": 3, "output": "640x480" }"#).unwrap();
//! assert_eq!(config.output.width, 640);
//! assert_eq!(config.num_circles, 2000);
//! ```

use {
  std::{fmt, path::Path, str::FromStr},
  serde::{Deserialize, Serialize, Deserializer, Serializer},
  crate::{
    error::{Error, Result},
    palette::Color
  }
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutputSize {
  pub width: u32,
  pub height: u32,
}

impl fmt::Display for OutputSize {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}x{}", self.width, self.height)
  }
}

impl FromStr for OutputSize {
  type Err = Error;

  /// `WIDTHxHEIGHT`, e.g. `1920x1080`
  fn from_str(s: &str) -> Result<Self> {
    let invalid = || Error::invalid(format!("`{}` is not a WIDTHxHEIGHT size", s));
    let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    Ok(OutputSize {
      width: w.trim().parse().map_err(|_| invalid())?,
      height: h.trim().parse().map_err(|_| invalid())?,
    })
  }
}

impl Serialize for OutputSize {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for OutputSize {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FractalConfig {
  /// Circle budget of the root level.
  pub num_circles: usize,
  /// Largest child radius, as a fraction of its parent's radius.
  pub max_radius: f64,
  /// Seed radius of every placed circle.
  pub min_radius: f64,
  /// Recursion levels below the root, counted as descents (see [`Fractal::max_depth`](crate::solver::Fractal::max_depth)).
  pub max_depth: usize,
  /// Pixels between circle edges.
  pub gap: f64,
  /// Children are filled, or only outlined.
  pub child_fill: bool,
  pub outline_thickness: f64,
  pub output: OutputSize,
  /// Root radius as a fraction of the shorter output side.
  pub root_scale: f64,
  pub background: Color,
  /// Number of colours taken from the source photograph.
  pub palette_colors: usize,
  /// The source photograph is scaled down until its longest edge fits.
  pub input_max_edge: u32,
  pub seed: Option<u64>,
}

impl Default for FractalConfig {
  fn default() -> Self {
    Self {
      num_circles: 2000,
      max_radius: 0.75,
      min_radius: 2.0,
      max_depth: 6,
      gap: 1.0,
      child_fill: true,
      outline_thickness: 1.0,
      output: OutputSize { width: 1080, height: 1080 },
      root_scale: 0.4,
      background: Color::BLACK,
      palette_colors: 15,
      input_max_edge: 1920,
      seed: None,
    }
  }
}

impl FractalConfig {
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let file = std::fs::File::open(path)?;
    let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    fn non_negative(name: &str, x: f64) -> Result<()> {
      if x.is_finite() && x >= 0.0 { Ok(()) }
      else { Err(Error::invalid(format!("{} must be finite and non-negative, got {}", name, x))) }
    }
    non_negative("min_radius", self.min_radius)?;
    non_negative("gap", self.gap)?;
    non_negative("outline_thickness", self.outline_thickness)?;
    if !(self.max_radius.is_finite() && self.max_radius > 0.0) {
      return Err(Error::invalid(format!("max_radius must be a positive fraction, got {}", self.max_radius)));
    }
    if !(self.root_scale > 0.0 && self.root_scale <= 0.5) {
      return Err(Error::invalid(format!("root_scale must be in (0, 0.5], got {}", self.root_scale)));
    }
    if self.output.width == 0 || self.output.height == 0 {
      return Err(Error::invalid(format!("output size {} is empty", self.output)));
    }
    if self.palette_colors == 0 {
      return Err(Error::invalid("palette_colors must be at least 1"));
    }
    if self.input_max_edge == 0 {
      return Err(Error::invalid("input_max_edge must be at least 1"));
    }
    Ok(())
  }

  /// Radius of the root circle, centered in the output image.
  pub fn root_radius(&self) -> f64 {
    self.output.width.min(self.output.height) as f64 * self.root_scale
  }
}
