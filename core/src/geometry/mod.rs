/// Types and helper functions for hex grid geometry and SVG path data.
pub mod coordinates;
pub mod layout;

pub use coordinates::{ring, spiral, HexCoord, DIRECTIONS};
pub use layout::{hex_to_pixel, Layout};

use serde::Serialize;

/// Just a typedef for the floating point type used for coordinates, etc.
pub type Float = f64;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
  pub x: Float,
  pub y: Float,
}

impl Point {
  pub fn new(x: Float, y: Float) -> Point {
    Point { x, y }
  }
}

impl From<(Float, Float)> for Point {
  fn from(p: (Float, Float)) -> Self {
    Point { x: p.0, y: p.1 }
  }
}

impl From<hexagon_tiles::point::Point> for Point {
  fn from(p: hexagon_tiles::point::Point) -> Self {
    Point { x: p.x, y: p.y }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
  Degrees(Float),
  Radians(Float),
}

impl From<Float> for Angle {
  fn from(f: Float) -> Self {
    Angle::Degrees(f)
  }
}

impl Angle {
  pub fn as_degrees(&self) -> Float {
    match self {
      Angle::Degrees(d) => *d,
      Angle::Radians(r) => r.to_degrees(),
    }
  }

  pub fn as_radians(&self) -> Float {
    match self {
      Angle::Degrees(d) => d.to_radians(),
      Angle::Radians(r) => *r,
    }
  }
}

/// Convert polar coordinates in the form of (center, radius, angle) to
/// Cartesian (x,y) coordinates. An angle of zero points straight up.
pub fn polar_to_cartesian(center: Point, radius: Float, angle: Angle) -> Point {
  let a = (angle.as_degrees() - 90.0).to_radians();
  Point {
    x: center.x + (radius * a.cos()),
    y: center.y + (radius * a.sin()),
  }
}

/// Given a center point and the size (center to vertex) of a hexagon, return
/// the x,y position of a single corner, identified by an index from 0-5.
/// Corner 0 is the top vertex; the rest follow clockwise in 60° steps.
pub fn hex_corner(center: Point, size: Float, corner_index: u8) -> Point {
  assert!(corner_index < 6, "invalid hex corner index {corner_index}");
  polar_to_cartesian(center, size, Angle::Degrees(60.0 * corner_index as Float))
}

pub fn hexagon_corners(center: Point, size: Float) -> [Point; 6] {
  [0, 1, 2, 3, 4, 5].map(|i| hex_corner(center, size, i))
}

/// Return a String describing a closed SVG path around a hexagon of the
/// given `size`, centered on the origin.
pub fn hexagon_outline(size: Float) -> String {
  let points = hexagon_corners(Point::default(), size)
    .iter()
    .map(|p| format!("{},{}", svg_num(p.x), svg_num(p.y)))
    .collect::<Vec<String>>()
    .join(" L ");
  format!("M {points} Z")
}

/// Formats a coordinate for SVG output, rounded to three decimals.
pub fn svg_num(v: Float) -> String {
  // adding 0.0 turns -0.0 into 0.0
  let rounded = (v * 1000.0).round() / 1000.0 + 0.0;
  format!("{rounded}")
}
