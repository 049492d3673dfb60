//! Weighted colour sources.
//!
//! A [`Palette`] maps colours to non-negative weights, typically pixel counts of a
//! quantized photograph. Drawing code never inspects the palette directly: it asks a
//! [`ColorSource`] to [`resolve`](ColorSource::resolve) one colour per shape.

use {
  std::{collections::BTreeMap, fmt, str::FromStr},
  rand::{Rng, distributions::{Distribution, WeightedIndex}},
  num_traits::ToPrimitive,
  serde::{Deserialize, Serialize, Deserializer, Serializer},
  crate::error::{Error, Result}
};

pub mod kmeans;

/// Independent k-means runs per quantization; the tightest clustering is kept.
pub const KMEANS_TRIALS: u32 = 3;
const KMEANS_SEED: u64 = 0;

/// 8-bit RGB colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Color(pub [u8; 3]);

impl Color {
  pub const BLACK: Color = Color([0, 0, 0]);
  pub const WHITE: Color = Color([255, 255, 255]);
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let [r, g, b] = self.0;
    write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
  }
}

impl FromStr for Color {
  type Err = Error;

  /// `#rrggbb` or `rrggbb`
  fn from_str(s: &str) -> Result<Self> {
    let hex = s.trim().trim_start_matches('#');
    let invalid = || Error::invalid(format!("`{}` is not a #rrggbb colour", s));
    if hex.len() != 6 || !hex.is_ascii() {
      return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16)
      .map_err(|_| invalid());
    Ok(Color([channel(0)?, channel(2)?, channel(4)?]))
  }
}

impl Serialize for Color {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for Color {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
  }
}

/// Colours with relative weights.
#[derive(Debug, Clone)]
pub struct Palette {
  entries: Vec<(Color, f64)>,
  total: f64,
  dist: WeightedIndex<f64>,
}

impl Palette {
  /// Duplicate colours are merged by summing their weights.
  /// Fails on an empty palette, on negative or non-finite weights, and when all weights are zero.
  pub fn new<W: ToPrimitive>(entries: impl IntoIterator<Item = (Color, W)>) -> Result<Self> {
    let mut merged = BTreeMap::<Color, f64>::new();
    for (color, weight) in entries {
      let weight = weight.to_f64()
        .filter(|w| w.is_finite() && *w >= 0.0)
        .ok_or_else(|| Error::invalid(format!("weight of {} must be finite and non-negative", color)))?;
      *merged.entry(color).or_default() += weight;
    }
    if merged.is_empty() {
      return Err(Error::invalid("palette is empty"));
    }
    let entries = merged.into_iter().collect::<Vec<_>>();
    let total = entries.iter().map(|(_, w)| w).sum::<f64>();
    let dist = WeightedIndex::new(entries.iter().map(|(_, w)| *w))
      .map_err(|e| Error::invalid(format!("palette weights: {}", e)))?;
    Ok(Self { entries, total, dist })
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn total_weight(&self) -> f64 {
    self.total
  }

  /// Colours and raw weights, ordered by colour.
  pub fn iter(&self) -> impl Iterator<Item = (Color, f64)> + '_ {
    self.entries.iter().copied()
  }

  /// Colours with weights normalized to sum to 1.
  pub fn probabilities(&self) -> impl Iterator<Item = (Color, f64)> + '_ {
    self.iter().map(move |(c, w)| (c, w / self.total))
  }

  /// Weighted random choice.
  pub fn sample(&self, rng: &mut impl Rng) -> Color {
    self.entries[self.dist.sample(rng)].0
  }

  /// One line per colour, heaviest first: `#rrggbb  weight  share%`.
  pub fn histogram(&self) -> Vec<String> {
    let mut rows = self.probabilities()
      .zip(self.entries.iter().map(|(_, w)| *w))
      .collect::<Vec<_>>();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    rows.into_iter()
      .map(|((color, p), w)| format!("{}  {:>10}  {:5.1}%", color, w, p * 100.0))
      .collect()
  }
}

/// Where the colour of a drawn circle comes from.
#[derive(Debug, Clone)]
pub enum ColorSource {
  Fixed(Color),
  Weighted(Palette),
}

impl ColorSource {
  /// Pick the colour for one shape. `Fixed` does not consume randomness.
  pub fn resolve(&self, rng: &mut impl Rng) -> Color {
    match self {
      ColorSource::Fixed(color) => *color,
      ColorSource::Weighted(palette) => palette.sample(rng),
    }
  }
}

impl From<Color> for ColorSource {
  fn from(c: Color) -> Self { ColorSource::Fixed(c) }
}

impl From<Palette> for ColorSource {
  fn from(p: Palette) -> Self { ColorSource::Weighted(p) }
}

impl Palette {
  /// Quantize pixels to at most `max_colors` representative colours.
  ///
  /// Colours are clustered with k-means; each centroid is weighted by the number of pixels
  /// in its cluster, so the palette keeps the whole pixel mass of the input. The clustering
  /// is seeded, the same pixels always give the same palette.
  pub fn from_pixels(pixels: impl IntoIterator<Item = Color>, max_colors: usize) -> Result<Self> {
    use rand::SeedableRng;

    let data = kmeans::ColorCounts::from_pixels(pixels);
    let mut rng = rand_pcg::Pcg64::seed_from_u64(KMEANS_SEED);
    let result = kmeans::run(&data, KMEANS_TRIALS, max_colors, &mut rng);
    tracing::debug!(
      pixels = data.pixels(), distinct = data.len(), clusters = result.centroids.len(),
      variance = result.variance, iterations = result.iterations,
      "palette quantized"
    );
    Self::new(result.centroids.iter().map(kmeans::to_color).zip(result.counts))
  }
}

#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
impl Palette {
  /// Dominant colours of a photograph, see [`from_pixels`](Palette::from_pixels).
  pub fn from_image(image: &image::RgbImage, max_colors: usize) -> Result<Self> {
    Self::from_pixels(image.pixels().map(|px| Color(px.0)), max_colors)
  }
}
