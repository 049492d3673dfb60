//! Recursive composition of packed levels.
//!
//! One call packs a circle, draws it together with its new children, then descends into
//! every child in placement order with the palette roles swapped. The circle budget
//! shrinks on the way down: each child takes the budget left by its earlier siblings,
//! reduced by its share of the parent's radius.

use {
  rand::Rng,
  crate::{
    config::FractalConfig,
    drawing::Raster,
    error::Result,
    geometry::Circle,
    palette::ColorSource,
    solver::packer::Packer
  }
};


/// Children of a circle this small or smaller are not drawn. They still recurse.
pub const MIN_DRAWN_PARENT_RADIUS: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fractal {
  pub packer: Packer,
  /// Largest child radius as a fraction of its parent's radius, on every level.
  pub max_radius_fraction: f64,
  /// Recursion levels below the root, counted as descents: 0 packs the root only,
  /// 1 also packs every child of the root. A `curr_depth < max_depth` style limit of `n`
  /// corresponds to `n - 1` here.
  pub max_depth: usize,
  /// Children are drawn filled, or outlined with `outline_thickness`.
  pub child_fill: bool,
  pub outline_thickness: f64,
}

impl Default for Fractal {
  fn default() -> Self {
    Self::from(&FractalConfig::default())
  }
}

impl From<&FractalConfig> for Fractal {
  fn from(config: &FractalConfig) -> Self {
    Self {
      packer: Packer::from(config),
      max_radius_fraction: config.max_radius,
      max_depth: config.max_depth,
      child_fill: config.child_fill,
      outline_thickness: config.outline_thickness,
    }
  }
}

/// Per-level colour sources, swapped on every descent.
#[derive(Debug, Copy, Clone)]
pub struct Colors<'a> {
  pub parent: &'a ColorSource,
  pub child: &'a ColorSource,
}

impl<'a> Colors<'a> {
  pub fn swapped(self) -> Self {
    Self { parent: self.child, child: self.parent }
  }
}

impl Fractal {
  pub fn from_config(config: &FractalConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self::from(config))
  }

  /// Pack `root` down to `max_depth`, drawing every level into `raster`.
  ///
  /// Returns the finished circle tree.
  pub fn compose<R: Raster + ?Sized>(
    &self,
    raster: &mut R,
    root: Circle,
    budget: usize,
    colors: Colors,
    rng: &mut impl Rng
  ) -> Circle {
    let tree = self.compose_level(raster, root, budget, colors, 0, rng);
    tracing::debug!(
      circles = tree.descendants(),
      depth = tree.depth(),
      "fractal composed"
    );
    tree
  }

  fn compose_level<R: Raster + ?Sized>(
    &self,
    raster: &mut R,
    circle: Circle,
    budget: usize,
    colors: Colors,
    depth: usize,
    rng: &mut impl Rng
  ) -> Circle {
    let max_radius = circle.r * self.max_radius_fraction;
    let (mut circle, stats) = self.packer.pack_with_stats(circle, budget, max_radius, rng);
    tracing::debug!(
      depth, r = circle.r, budget,
      placed = stats.placed, discarded = stats.discarded,
      "level packed"
    );

    self.draw_level(raster, &circle, colors, rng);

    let depth = depth + 1;
    if depth > self.max_depth {
      return circle;
    }

    let children = std::mem::take(&mut circle.children);
    let budgets = child_budgets(budget, circle.r, children.iter().map(|c| c.r));
    circle.children = children.into_iter()
      .zip(budgets)
      .map(|(child, budget)| self.compose_level(raster, child, budget, colors.swapped(), depth, rng))
      .collect();
    circle
  }

  fn draw_level<R: Raster + ?Sized>(&self, raster: &mut R, circle: &Circle, colors: Colors, rng: &mut impl Rng) {
    raster.draw_filled_circle(circle.center, circle.r, colors.parent.resolve(rng));
    if circle.r <= MIN_DRAWN_PARENT_RADIUS {
      return;
    }
    for child in &circle.children {
      let color = colors.child.resolve(rng);
      if self.child_fill {
        raster.draw_filled_circle(child.center, child.r, color);
      } else {
        raster.draw_outlined_circle(child.center, child.r, color, self.outline_thickness);
      }
    }
  }
}

/// Budget handed to each child, in order.
///
/// The running budget is reduced by `budget * (r / parent_r)` before each child takes it,
/// so later siblings inherit what earlier ones left. Children receive the truncated value.
pub fn child_budgets(
  budget: usize,
  parent_r: f64,
  radii: impl IntoIterator<Item = f64>
) -> Vec<usize> {
  let mut remaining = budget as f64;
  radii.into_iter()
    .map(|r| {
      remaining -= remaining * (r / parent_r);
      remaining.max(0.0) as usize
    })
    .collect()
}
