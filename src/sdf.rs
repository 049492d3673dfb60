use {
  euclid::{Point2D, Box2D, Vector2D as V2},
  num_traits::Float,
  crate::geometry::{BoundingBox, Circle, PixelSpace, Point}
};

/// Signed distance function: negative inside the shape, positive outside.
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f64> + BoundingBox<f64, PixelSpace> {}
impl <T> Shape for T where T: SDF<f64> + BoundingBox<f64, PixelSpace> {}

/// Filled circle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc<T> {
  pub center: Point2D<T, PixelSpace>,
  pub r: T,
}

/// Circle outline, `thickness` pixels wide and centered on the rim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ring<T> {
  pub center: Point2D<T, PixelSpace>,
  pub r: T,
  pub thickness: T,
}

impl Disc<f64> {
  pub fn new(center: Point, r: f64) -> Self {
    Self { center: center.to_f64(), r }
  }
}

impl Ring<f64> {
  pub fn new(center: Point, r: f64, thickness: f64) -> Self {
    Self { center: center.to_f64(), r, thickness }
  }
}

impl From<&Circle> for Disc<f64> {
  fn from(c: &Circle) -> Self {
    Disc::new(c.center, c.r)
  }
}

impl<T: Float> SDF<T> for Disc<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T {
    (pixel - self.center).length() - self.r
  }
}

impl<T: Float> SDF<T> for Ring<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T {
    let half = self.thickness / (T::one() + T::one());
    ((pixel - self.center).length() - self.r).abs() - half
  }
}

impl<T: Float> BoundingBox<T, PixelSpace> for Disc<T> {
  fn bounding_box(&self) -> Box2D<T, PixelSpace> {
    let c = self.center.to_vector();
    Box2D::new(
      (c - V2::splat(self.r)).to_point(),
      (c + V2::splat(self.r)).to_point()
    )
  }
}

impl<T: Float> BoundingBox<T, PixelSpace> for Ring<T> {
  fn bounding_box(&self) -> Box2D<T, PixelSpace> {
    let c = self.center.to_vector();
    let extent = self.r + self.thickness / (T::one() + T::one());
    Box2D::new(
      (c - V2::splat(extent)).to_point(),
      (c + V2::splat(extent)).to_point()
    )
  }
}

#[cfg(test)]
mod tests {
  use {super::*, euclid::point2};

  #[test] fn disc() {
    let d = Disc::new(point2(10, 10), 5.0);
    assert_eq!(d.sdf(point2(10.0, 10.0)), -5.0);
    assert_eq!(d.sdf(point2(15.0, 10.0)), 0.0);
    assert_eq!(d.sdf(point2(10.0, 20.0)), 5.0);
  }

  #[test] fn ring() {
    let r = Ring::new(point2(0, 0), 10.0, 2.0);
    assert_eq!(r.sdf(point2(10.0, 0.0)), -1.0);
    assert_eq!(r.sdf(point2(0.0, 0.0)), 9.0);
    assert_eq!(r.sdf(point2(0.0, 13.0)), 2.0);
    let bb = r.bounding_box();
    assert_eq!((bb.min.x, bb.max.x), (-11.0, 11.0));
  }
}
