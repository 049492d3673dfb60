//! Random placement and growth of non-overlapping circles inside a parent circle.
//!
//! Every circle starts as a seed of `min_radius` at a uniformly random point of the parent
//! disc. A seed that collides with the parent rim or with an already placed sibling is
//! rejected and a new point is drawn. An accepted seed grows one pixel at a time for as long
//! as it stays admissible, and is appended to the parent at its last admissible size.
//!
//! Rejections are counted over the whole packing run, not per circle. Once
//! `floor(0.75 * num_circles)` seeds have been rejected, the remaining slots are discarded:
//! dense regions end up with fewer children than requested instead of searching forever.

use {
  std::f64::consts::PI,
  euclid::point2,
  rand::Rng,
  crate::{
    config::FractalConfig,
    geometry::{Circle, Point, intersects_outside, intersects_boundary}
  }
};

#[cfg(test)] mod tests;

/// Share of the requested circle count that may be rejected before the run gives up.
pub const RETRY_FRACTION: f64 = 0.75;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Packer {
  /// Radius of a freshly placed seed.
  pub min_radius: f64,
  /// Minimal distance between circle edges, and between a circle and its parent's rim.
  pub gap: f64,
}

/// Outcome of a single packing run.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PackStats {
  pub requested: usize,
  pub placed: usize,
  /// Rejected seeds.
  pub failed_attempts: usize,
  /// Slots dropped after the retry budget ran out.
  pub discarded: usize,
}

impl PackStats {
  pub fn exhausted(&self) -> bool {
    self.discarded > 0
  }
}

impl Default for Packer {
  fn default() -> Self {
    Self { min_radius: 2.0, gap: 1.0 }
  }
}

impl From<&FractalConfig> for Packer {
  fn from(config: &FractalConfig) -> Self {
    Self { min_radius: config.min_radius, gap: config.gap }
  }
}

impl Packer {
  pub fn new(min_radius: f64, gap: f64) -> Self {
    Self { min_radius, gap }
  }

  /// Cumulative number of rejections allowed for a run of `num_circles`.
  pub fn retry_budget(num_circles: usize) -> usize {
    (num_circles as f64 * RETRY_FRACTION).floor() as usize
  }

  /// Fill `parent` with up to `num_circles` children no larger than `max_radius`.
  ///
  /// Existing children of `parent` are kept and treated as obstacles.
  pub fn pack(&self, parent: Circle, num_circles: usize, max_radius: f64, rng: &mut impl Rng) -> Circle {
    self.pack_with_stats(parent, num_circles, max_radius, rng).0
  }

  pub fn pack_with_stats(
    &self,
    mut parent: Circle,
    num_circles: usize,
    max_radius: f64,
    rng: &mut impl Rng
  ) -> (Circle, PackStats) {
    let retry_budget = Self::retry_budget(num_circles);
    let mut stats = PackStats { requested: num_circles, ..Default::default() };

    'slots: for slot in 0..num_circles {
      let seed = loop {
        let seed = Circle::new(random_point(&parent, rng), self.min_radius);
        if self.admissible(&seed, &parent, max_radius) {
          break seed;
        }
        stats.failed_attempts += 1;
        if stats.failed_attempts >= retry_budget {
          stats.discarded = num_circles - slot;
          break 'slots;
        }
      };
      let circle = self.grow(seed, &parent, max_radius);
      parent.children.push(circle);
      stats.placed += 1;
    }

    tracing::trace!(
      center = ?parent.center.to_tuple(), r = parent.r, max_radius,
      requested = stats.requested, placed = stats.placed,
      failed = stats.failed_attempts, discarded = stats.discarded,
      "packed circle"
    );
    (parent, stats)
  }

  /// Within `max_radius`, clear of every sibling, and inside the parent.
  pub fn admissible(&self, candidate: &Circle, parent: &Circle, max_radius: f64) -> bool {
    candidate.r <= max_radius
      && !parent.children.iter().any(|sibling| intersects_outside(candidate, sibling, self.gap))
      && !intersects_boundary(candidate, parent, self.gap)
  }

  /// Grow an admissible circle one pixel at a time, keeping the last admissible radius.
  fn grow(&self, mut circle: Circle, parent: &Circle, max_radius: f64) -> Circle {
    loop {
      let next = Circle::new(circle.center, circle.r + 1.0);
      if !self.admissible(&next, parent, max_radius) {
        return circle;
      }
      circle.r = next.r;
    }
  }
}

/// Uniformly distributed point inside the disc of `circle`, truncated to the pixel grid.
pub fn random_point(circle: &Circle, rng: &mut impl Rng) -> Point {
  let r = circle.r * rng.gen::<f64>().sqrt();
  let theta = rng.gen::<f64>() * 2.0 * PI;
  let center = circle.center.to_f64();
  point2(
    (center.x + r * theta.cos()) as i32,
    (center.y + r * theta.sin()) as i32
  )
}
