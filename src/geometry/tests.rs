use {
  super::*,
  euclid::point2
};

fn circle(x: i32, y: i32, r: f64) -> Circle {
  Circle::new(point2(x, y), r)
}

#[test] fn outside_touching() {
  // centers 10 apart, radii sum to 10
  let (a, b) = (circle(0, 0, 4.0), circle(10, 0, 6.0));
  assert!(intersects_outside(&a, &b, 0.0));
  assert!(intersects_outside(&b, &a, 0.0));
  assert!(!intersects_outside(&circle(0, 0, 3.0), &b, 0.0));
}

#[test] fn outside_gap() {
  let (a, b) = (circle(0, 0, 3.0), circle(10, 0, 6.0));
  assert!(!intersects_outside(&a, &b, 0.5));
  assert!(intersects_outside(&a, &b, 1.0));
  assert!(intersects_outside(&a, &b, 2.0));
}

#[test] fn outside_diagonal() {
  // 3-4-5 triangle
  let (a, b) = (circle(0, 0, 2.0), circle(3, 4, 2.0));
  assert!(!intersects_outside(&a, &b, 0.0));
  assert!(intersects_outside(&a, &b, 1.0));
}

#[test] fn boundary_contained() {
  let outer = circle(100, 100, 50.0);
  assert!(!intersects_boundary(&circle(100, 100, 10.0), &outer, 1.0));
  assert!(!intersects_boundary(&circle(130, 100, 10.0), &outer, 1.0));
}

#[test] fn boundary_crossing() {
  let outer = circle(100, 100, 50.0);
  // touches the rim from inside
  assert!(intersects_boundary(&circle(140, 100, 10.0), &outer, 0.0));
  // within the gap of the rim
  assert!(intersects_boundary(&circle(139, 100, 10.0), &outer, 1.0));
  assert!(!intersects_boundary(&circle(139, 100, 10.0), &outer, 0.5));
  // entirely outside
  assert!(intersects_boundary(&circle(300, 100, 10.0), &outer, 0.0));
  // larger than the container
  assert!(intersects_boundary(&circle(100, 100, 60.0), &outer, 0.0));
}

#[test] fn tree_queries() {
  let mut root = circle(0, 0, 100.0);
  let mut a = circle(10, 0, 20.0);
  a.children.push(circle(12, 0, 5.0));
  root.children.push(a);
  root.children.push(circle(-50, 0, 20.0));

  assert_eq!(root.descendants(), 3);
  assert_eq!(root.depth(), 2);
  let radii = root.iter().map(|c| c.r).collect::<Vec<_>>();
  assert_eq!(radii, vec![100.0, 20.0, 5.0, 20.0]);

  let bb = root.children[1].bounding_box();
  assert_eq!((bb.min.x, bb.min.y, bb.max.x, bb.max.y), (-70.0, -20.0, -30.0, 20.0));
}
