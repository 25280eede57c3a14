use std::{
  fmt::{self, Display},
  ops::{Add, Mul},
};

use serde::{Deserialize, Serialize};

/// Axial unit offsets of the six neighbors, in the fixed order used for
/// frontier growth: right, top-right, top-left, left, bottom-left, bottom-right.
pub const DIRECTIONS: [HexCoord; 6] = [
  HexCoord { q: 1, r: 0 },
  HexCoord { q: 1, r: -1 },
  HexCoord { q: 0, r: -1 },
  HexCoord { q: -1, r: 0 },
  HexCoord { q: -1, r: 1 },
  HexCoord { q: 0, r: 1 },
];

// walking order around a ring, starting from the top-right corner
const RING_WALK: [HexCoord; 6] = [
  HexCoord { q: -1, r: 0 },
  HexCoord { q: -1, r: 1 },
  HexCoord { q: 0, r: 1 },
  HexCoord { q: 1, r: 0 },
  HexCoord { q: 1, r: -1 },
  HexCoord { q: 0, r: -1 },
];

/// Axial coordinates of a single cell in an unbounded hex grid.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct HexCoord {
  pub q: i32,
  pub r: i32,
}

impl HexCoord {
  pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

  pub fn new(q: i32, r: i32) -> HexCoord {
    HexCoord { q, r }
  }

  /// The implied third cube coordinate.
  pub fn s(&self) -> i32 {
    -self.q - self.r
  }

  pub fn neighbors(&self) -> [HexCoord; 6] {
    DIRECTIONS.map(|d| *self + d)
  }

  pub fn is_neighbor(&self, other: &HexCoord) -> bool {
    self.distance(other) == 1
  }

  pub fn distance(&self, other: &HexCoord) -> u32 {
    let dq = (self.q - other.q).unsigned_abs();
    let dr = (self.r - other.r).unsigned_abs();
    let ds = (self.s() - other.s()).unsigned_abs();
    dq.max(dr).max(ds)
  }

  /// Which ring around the origin this cell belongs to.
  pub fn ring_index(&self) -> u32 {
    self.distance(&HexCoord::ORIGIN)
  }

  /// Canonical `"q,r"` map key. Two coordinates are equal iff their keys are.
  pub fn key(&self) -> String {
    format!("{},{}", self.q, self.r)
  }

  pub fn from_key(key: &str) -> Option<HexCoord> {
    let (q, r) = key.split_once(',')?;
    let q = q.trim().parse().ok()?;
    let r = r.trim().parse().ok()?;
    Some(HexCoord { q, r })
  }
}

impl Add for HexCoord {
  type Output = HexCoord;

  fn add(self, rhs: HexCoord) -> HexCoord {
    HexCoord {
      q: self.q + rhs.q,
      r: self.r + rhs.r,
    }
  }
}

impl Mul<i32> for HexCoord {
  type Output = HexCoord;

  fn mul(self, rhs: i32) -> HexCoord {
    HexCoord {
      q: self.q * rhs,
      r: self.r * rhs,
    }
  }
}

impl Display for HexCoord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{},{}", self.q, self.r)
  }
}

/// All cells at exactly `radius` steps from `center`, walking the perimeter
/// from the `(+radius, -radius)` corner. A radius of zero yields `[center]`.
pub fn ring(center: HexCoord, radius: u32) -> Vec<HexCoord> {
  if radius == 0 {
    return vec![center];
  }

  let steps = radius as i32;
  let mut results = Vec::with_capacity(6 * radius as usize);
  let mut hex = center + HexCoord::new(1, -1) * steps;
  for dir in RING_WALK {
    for _ in 0..steps {
      results.push(hex);
      hex = hex + dir;
    }
  }
  results
}

/// Rings `0..=max_radius` around `center`, innermost first.
pub fn spiral(center: HexCoord, max_radius: u32) -> Vec<HexCoord> {
  (0..=max_radius).flat_map(|radius| ring(center, radius)).collect()
}
