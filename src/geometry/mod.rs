//! .
//!
//! The origin of the coordinate system is in the top-left corner of the raster, and all
//! coordinates are in pixels. Centers are integer; radii keep their fractional part so that
//! `radius * fraction` budgets don't get rounded away between levels.

use {
  euclid::{Point2D, Box2D, Vector2D as V2},
};

pub mod collision;
pub use collision::{intersects_outside, intersects_boundary};

#[cfg(test)] mod tests;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// Raster coordinate.
pub type Point = Point2D<i32, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// A node of the circle tree.
///
/// The root is created by the caller; every descendant is created by
/// [`Packer`](crate::solver::Packer). A circle owns its children, in placement order.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
  pub center: Point,
  pub r: f64,
  pub children: Vec<Circle>,
}

impl Circle {
  pub fn new(center: Point, r: f64) -> Self {
    Self { center, r, children: vec![] }
  }

  /// Euclidean distance between centers.
  pub fn distance_to(&self, other: &Circle) -> f64 {
    self.center.to_f64().distance_to(other.center.to_f64())
  }

  /// Total number of circles below this one.
  pub fn descendants(&self) -> usize {
    self.children.iter()
      .map(|c| 1 + c.descendants())
      .sum()
  }

  /// Number of levels in the tree, a leaf has depth 0.
  pub fn depth(&self) -> usize {
    self.children.iter()
      .map(|c| 1 + c.depth())
      .max()
      .unwrap_or(0)
  }

  /// Depth-first, pre-order traversal, starting with `self`.
  pub fn iter(&self) -> impl Iterator<Item = &Circle> + '_ {
    let mut stack = vec![self];
    std::iter::from_fn(move || {
      let next = stack.pop()?;
      stack.extend(next.children.iter().rev());
      Some(next)
    })
  }
}

impl BoundingBox<f64, PixelSpace> for Circle {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> {
    let c = self.center.to_f64().to_vector();
    Box2D::new(
      (c - V2::splat(self.r)).to_point(),
      (c + V2::splat(self.r)).to_point()
    )
  }
}
