use hexagon_tiles::hexagon::Hex as _Hex;
use hexagon_tiles::layout::{Layout as _Layout, LayoutTool, LAYOUT_ORIENTATION_POINTY};
use hexagon_tiles::point::Point as _Point;
use std::ops::Deref;

use super::{coordinates::HexCoord, Float, Point};

/// Projects axial coordinates into pixel space, centered on the origin.
///
/// The axial basis is `x = size * (sqrt(3) * q + sqrt(3)/2 * r)`,
/// `y = size * (3/2 * r)`, which is the pointy orientation of the
/// underlying layout tool with a zero origin.
#[derive(Clone, Copy)]
pub struct Layout(_Layout);

impl Deref for Layout {
  type Target = _Layout;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl PartialEq for Layout {
  fn eq(&self, rhs: &Self) -> bool {
    self.size == rhs.size && self.origin == rhs.origin
  }
}

impl Layout {
  pub fn new(size: Float) -> Layout {
    Layout(_Layout {
      orientation: LAYOUT_ORIENTATION_POINTY,
      size: _Point { x: size, y: size },
      origin: _Point { x: 0.0, y: 0.0 },
    })
  }

  pub fn size(&self) -> Float {
    self.0.size.x
  }

  pub fn hex_to_pixel(&self, hex: HexCoord) -> Point {
    LayoutTool::hex_to_pixel(**self, _Hex::new(hex.q, hex.r)).into()
  }
}

pub fn hex_to_pixel(hex: HexCoord, size: Float) -> Point {
  Layout::new(size).hex_to_pixel(hex)
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPSILON: Float = 1e-6;

  fn expected(q: i32, r: i32, size: Float) -> Point {
    let sqrt3 = (3.0 as Float).sqrt();
    Point {
      x: size * (sqrt3 * q as Float + sqrt3 / 2.0 * r as Float),
      y: size * (1.5 * r as Float),
    }
  }

  #[test]
  fn origin_maps_to_origin() {
    let p = hex_to_pixel(HexCoord::ORIGIN, 60.0);
    assert!(p.x.abs() < EPSILON && p.y.abs() < EPSILON);
  }

  #[test]
  fn projection_matches_axial_basis() {
    for (q, r) in [(1, 0), (0, 1), (-2, 3), (4, -1), (-3, -3)] {
      let got = hex_to_pixel(HexCoord::new(q, r), 50.0);
      let want = expected(q, r, 50.0);
      assert!((got.x - want.x).abs() < EPSILON, "x for {q},{r}");
      assert!((got.y - want.y).abs() < EPSILON, "y for {q},{r}");
    }
  }

  #[test]
  fn neighbor_centers_are_equidistant() {
    let size = 40.0;
    let step = (3.0 as Float).sqrt() * size;
    for n in HexCoord::ORIGIN.neighbors() {
      let p = hex_to_pixel(n, size);
      let d = (p.x * p.x + p.y * p.y).sqrt();
      assert!((d - step).abs() < 1e-6);
    }
  }

  #[test]
  fn layouts_compare_by_size() {
    assert!(Layout::new(10.0) == Layout::new(10.0));
    assert!(Layout::new(10.0) != Layout::new(12.0));
    assert_eq!(Layout::new(12.5).size(), 12.5);
  }
}
