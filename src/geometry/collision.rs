use super::Circle;

/// Two free-standing circles overlap, or come within `gap` pixels of each other.
pub fn intersects_outside(a: &Circle, b: &Circle, gap: f64) -> bool {
  a.distance_to(b) <= a.r + b.r + gap
}

/// `inner` is not safely contained in `outer`: its edge crosses the boundary of `outer`,
/// or comes within `gap` pixels of it.
pub fn intersects_boundary(inner: &Circle, outer: &Circle, gap: f64) -> bool {
  inner.distance_to(outer) >= outer.r - inner.r - gap
}
