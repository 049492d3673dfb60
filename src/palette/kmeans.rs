//! Weighted k-means over RGB colours.
//!
//! Pixels are deduplicated first, so every distinct colour takes part in the clustering once,
//! weighted by the number of pixels that carry it. Centroids are seeded with k-means++ and
//! refined with Lloyd iterations until none of them moves more than
//! [`CONVERGENCE_THRESHOLD`].

use {
  std::collections::HashMap,
  rand::{Rng, distributions::{Distribution, WeightedIndex}},
  crate::palette::Color
};

/// Largest centroid shift, in 0..255 channel units, still treated as movement.
pub const CONVERGENCE_THRESHOLD: f64 = 0.5;
pub const MAX_ITERATIONS: u32 = 64;

pub type Rgb = [f64; 3];

/// Distinct colours with the number of pixels of each, ordered by colour.
#[derive(Debug, Clone, Default)]
pub struct ColorCounts {
  colors: Vec<Rgb>,
  counts: Vec<u64>,
}

impl ColorCounts {
  pub fn from_pixels(pixels: impl IntoIterator<Item = Color>) -> Self {
    let mut memo = HashMap::<Color, u64>::new();
    pixels.into_iter().for_each(|color| *memo.entry(color).or_default() += 1);
    let mut entries = memo.into_iter().collect::<Vec<_>>();
    // hash order would make seeded runs differ
    entries.sort_unstable_by_key(|(color, _)| *color);
    let (colors, counts) = entries.into_iter()
      .map(|(Color([r, g, b]), n)| ([r as f64, g as f64, b as f64], n))
      .unzip();
    Self { colors, counts }
  }

  /// Number of distinct colours.
  pub fn len(&self) -> usize {
    self.colors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }

  pub fn pixels(&self) -> u64 {
    self.counts.iter().sum()
  }
}

#[derive(Debug, Clone, Default)]
pub struct KmeansResult {
  pub centroids: Vec<Rgb>,
  /// Pixels assigned to each centroid. Never zero.
  pub counts: Vec<u64>,
  /// Mean squared distance of a pixel to its centroid.
  pub variance: f64,
  pub iterations: u32,
}

/// Cluster `data` into at most `k` colours, keeping the best of `trials` runs.
///
/// Fewer than `k` centroids come back when the data has fewer distinct colours.
pub fn run(data: &ColorCounts, trials: u32, k: usize, rng: &mut impl Rng) -> KmeansResult {
  (0..trials)
    .map(|_| run_trial(data, k, rng))
    .min_by(|a, b| a.variance.total_cmp(&b.variance))
    .unwrap_or_default()
}

fn run_trial(data: &ColorCounts, k: usize, rng: &mut impl Rng) -> KmeansResult {
  let mut centroids = seed_centroids(data, k, rng);
  if centroids.is_empty() {
    return KmeansResult::default();
  }
  let mut assignment = vec![0; data.len()];
  let mut iterations = 0;
  while iterations < MAX_ITERATIONS {
    iterations += 1;
    assign(data, &centroids, &mut assignment);
    if update(data, &assignment, &mut centroids) <= CONVERGENCE_THRESHOLD {
      break;
    }
  }

  let variance = assign(data, &centroids, &mut assignment);
  let mut counts = vec![0; centroids.len()];
  assignment.iter()
    .zip(&data.counts)
    .for_each(|(&cluster, &n)| counts[cluster] += n);
  let (centroids, counts) = centroids.into_iter()
    .zip(counts)
    .filter(|(_, n)| *n > 0)
    .unzip();
  KmeansResult { centroids, counts, variance, iterations }
}

/// k-means++: each new centroid is a colour drawn with probability proportional to its
/// pixel count times its squared distance to the nearest centroid so far.
fn seed_centroids(data: &ColorCounts, k: usize, rng: &mut impl Rng) -> Vec<Rgb> {
  let mut centroids = Vec::with_capacity(k);
  let mut nearest = vec![f64::INFINITY; data.len()];
  while centroids.len() < k {
    let first = centroids.is_empty();
    let weights = data.counts.iter()
      .zip(&nearest)
      .map(|(&n, &d)| if first { n as f64 } else { n as f64 * d });
    // fails once every colour coincides with a centroid
    let dist = match WeightedIndex::new(weights) {
      Ok(dist) => dist,
      Err(_) => break
    };
    let centroid = data.colors[dist.sample(rng)];
    nearest.iter_mut()
      .zip(&data.colors)
      .for_each(|(d, color)| *d = d.min(distance2(color, &centroid)));
    centroids.push(centroid);
  }
  centroids
}

/// Assign every colour to its nearest centroid, returning the variance.
fn assign(data: &ColorCounts, centroids: &[Rgb], assignment: &mut [usize]) -> f64 {
  let mut total = 0.0;
  for ((slot, color), &n) in assignment.iter_mut().zip(&data.colors).zip(&data.counts) {
    let (cluster, d) = nearest_centroid(color, centroids);
    *slot = cluster;
    total += n as f64 * d;
  }
  match data.pixels() {
    0 => 0.0,
    pixels => total / pixels as f64
  }
}

/// Move every centroid to the weighted mean of its colours. Returns the largest shift.
fn update(data: &ColorCounts, assignment: &[usize], centroids: &mut [Rgb]) -> f64 {
  let mut sums = vec![([0.0; 3], 0.0); centroids.len()];
  for ((&cluster, color), &n) in assignment.iter().zip(&data.colors).zip(&data.counts) {
    let (sum, weight) = &mut sums[cluster];
    let n = n as f64;
    sum.iter_mut().zip(color).for_each(|(s, c)| *s += c * n);
    *weight += n;
  }

  let mut shift = 0.0f64;
  for (centroid, (sum, weight)) in centroids.iter_mut().zip(sums) {
    if weight == 0.0 { continue; }
    let next = sum.map(|s| s / weight);
    shift = shift.max(distance2(centroid, &next).sqrt());
    *centroid = next;
  }
  shift
}

fn nearest_centroid(color: &Rgb, centroids: &[Rgb]) -> (usize, f64) {
  centroids.iter()
    .map(|c| distance2(color, c))
    .enumerate()
    .fold((0, f64::INFINITY), |best, (i, d)| if d < best.1 { (i, d) } else { best })
}

fn distance2(a: &Rgb, b: &Rgb) -> f64 {
  a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

pub fn to_color(rgb: &Rgb) -> Color {
  Color(rgb.map(|x| x.round().clamp(0.0, 255.0) as u8))
}

#[cfg(test)]
mod tests {
  use {super::*, rand::SeedableRng, rand_pcg::Pcg64};

  #[test] fn clusters_keep_every_pixel() {
    let pixels = (0..50).map(|i| Color([100 + i, 0, 0]))
      .chain((0..30).map(|i| Color([0, 0, 150 + i])));
    let data = ColorCounts::from_pixels(pixels);
    assert_eq!((data.len(), data.pixels()), (80, 80));

    let result = run(&data, 2, 2, &mut Pcg64::seed_from_u64(0));
    assert_eq!(result.centroids.len(), 2);
    assert_eq!(result.counts.iter().sum::<u64>(), 80);
    let mut counts = result.counts.clone();
    counts.sort_unstable();
    assert_eq!(counts, vec![30, 50]);
    assert!(result.iterations >= 1 && result.iterations <= MAX_ITERATIONS);
  }

  #[test] fn fewer_colours_than_clusters() {
    let data = ColorCounts::from_pixels([Color([1, 2, 3]), Color([1, 2, 3]), Color([9, 9, 9])]);
    let result = run(&data, 1, 8, &mut Pcg64::seed_from_u64(0));
    let mut centroids = result.centroids.clone();
    centroids.sort_by(|a, b| a[0].total_cmp(&b[0]));
    assert_eq!(centroids, vec![[1.0, 2.0, 3.0], [9.0, 9.0, 9.0]]);
    assert_eq!(result.variance, 0.0);
  }

  #[test] fn empty_input() {
    let data = ColorCounts::from_pixels([]);
    let result = run(&data, 3, 4, &mut Pcg64::seed_from_u64(0));
    assert!(result.centroids.is_empty() && result.counts.is_empty());
  }

  #[test] fn rounding() {
    assert_eq!(to_color(&[-3.0, 127.5, 300.0]), Color([0, 128, 255]));
  }
}
