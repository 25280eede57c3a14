use std::{collections::HashMap, fmt::Display};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::geometry::HexCoord;

/// Word shown on the anchor tile in the middle of every picture.
pub const ANCHOR_WORD: &str = "Ich bin";

/// An adjective as handed over by the sorting page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
  #[serde(default)]
  pub id: Option<i64>,
  pub word: String,
}

impl Card {
  pub fn new(id: i64, word: &str) -> Card {
    Card {
      id: Some(id),
      word: word.to_string(),
    }
  }

  /// The synthetic "Ich bin" card placed on the center cell.
  pub fn anchor() -> Card {
    Card {
      id: None,
      word: ANCHOR_WORD.to_string(),
    }
  }
}

/// Which group a tile on the grid belongs to. Determines styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
  Center,
  Oft,
  Manchmal,
}

impl Bucket {
  pub fn name(&self) -> &'static str {
    match self {
      Bucket::Center => "center",
      Bucket::Oft => "oft",
      Bucket::Manchmal => "manchmal",
    }
  }

  /// Unknown bucket names are styled like `manchmal`.
  pub fn from_name(name: &str) -> Bucket {
    match name {
      "center" => Bucket::Center,
      "oft" => Bucket::Oft,
      "manchmal" => Bucket::Manchmal,
      other => {
        warn!("unknown bucket '{other}', styling as manchmal");
        Bucket::Manchmal
      }
    }
  }

  pub fn is_bold(&self) -> bool {
    matches!(self, Bucket::Center | Bucket::Oft)
  }
}

impl Display for Bucket {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
  pub hex: HexCoord,
  pub card: Card,
  pub bucket: Bucket,
}

/// Axial extent of a set of placements. Always includes the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridBounds {
  pub min_q: i32,
  pub max_q: i32,
  pub min_r: i32,
  pub max_r: i32,
}

impl GridBounds {
  pub fn include(&mut self, hex: HexCoord) {
    self.min_q = self.min_q.min(hex.q);
    self.max_q = self.max_q.max(hex.q);
    self.min_r = self.min_r.min(hex.r);
    self.max_r = self.max_r.max(hex.r);
  }

  pub fn min_corner(&self) -> HexCoord {
    HexCoord::new(self.min_q, self.min_r)
  }

  pub fn max_corner(&self) -> HexCoord {
    HexCoord::new(self.max_q, self.max_r)
  }
}

/// Cell → placement map produced by the packer.
///
/// Keeps placements in the order they were made (center first), with a hash
/// index for lookup by coordinate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementMap {
  order: Vec<HexCoord>,
  cells: HashMap<HexCoord, Placement>,
}

impl PlacementMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Records a placement. Returns `false` and leaves the map untouched if the
  /// cell is already taken.
  pub(crate) fn insert(&mut self, placement: Placement) -> bool {
    if self.cells.contains_key(&placement.hex) {
      return false;
    }
    self.order.push(placement.hex);
    self.cells.insert(placement.hex, placement);
    true
  }

  pub fn get(&self, hex: &HexCoord) -> Option<&Placement> {
    self.cells.get(hex)
  }

  /// Lookup by the canonical `"q,r"` key.
  pub fn get_key(&self, key: &str) -> Option<&Placement> {
    HexCoord::from_key(key).and_then(|hex| self.get(&hex))
  }

  pub fn contains(&self, hex: &HexCoord) -> bool {
    self.cells.contains_key(hex)
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  /// Placements in placement order.
  pub fn iter(&self) -> impl Iterator<Item = &Placement> + '_ {
    self.order.iter().filter_map(|hex| self.cells.get(hex))
  }

  pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
    self.order.iter().map(HexCoord::key)
  }

  pub fn bounds(&self) -> GridBounds {
    let mut bounds = GridBounds::default();
    for hex in &self.order {
      bounds.include(*hex);
    }
    bounds
  }
}
