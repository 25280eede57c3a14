/// Composition of tiles into a drawable picture.
pub mod svg;

use log::debug;
use serde::Serialize;

use crate::{
  color::ThemeId,
  geometry::{Float, HexCoord, Layout, Point},
  grid::{Bucket, PlacementMap},
  tile::{layout_tile, TileVisual},
};

/// Extra space around the outermost tile centers, in multiples of the hex size.
pub const VIEWPORT_PADDING: Float = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
  pub x: Float,
  pub y: Float,
  pub width: Float,
  pub height: Float,
}

impl Viewport {
  /// Used when there is nothing to draw.
  pub const EMPTY: Viewport = Viewport {
    x: 0.0,
    y: 0.0,
    width: 200.0,
    height: 200.0,
  };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedTile {
  pub key: String,
  pub hex: HexCoord,
  pub center: Point,
  pub bucket: Bucket,
  pub visual: TileVisual,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridView {
  pub viewport: Viewport,
  pub tiles: Vec<PositionedTile>,
}

/// Lays out every placement as a tile and computes the viewport around them.
pub fn render(placements: &PlacementMap, theme: ThemeId, hex_size: Float) -> GridView {
  if placements.is_empty() {
    return GridView {
      viewport: Viewport::EMPTY,
      tiles: vec![],
    };
  }

  let layout = Layout::new(hex_size);
  let bounds = placements.bounds();
  let min = layout.hex_to_pixel(bounds.min_corner());
  let max = layout.hex_to_pixel(bounds.max_corner());
  let padding = hex_size * VIEWPORT_PADDING;
  let viewport = Viewport {
    x: min.x - padding,
    y: min.y - padding,
    width: max.x - min.x + padding * 2.0,
    height: max.y - min.y + padding * 2.0,
  };

  let tiles = placements
    .iter()
    .map(|p| PositionedTile {
      key: p.hex.key(),
      hex: p.hex,
      center: layout.hex_to_pixel(p.hex),
      bucket: p.bucket,
      visual: layout_tile(&p.card.word, p.bucket, theme, hex_size),
    })
    .collect::<Vec<_>>();

  debug!(
    "rendered {} tiles into {}x{} viewport",
    tiles.len(),
    viewport.width,
    viewport.height
  );

  GridView { viewport, tiles }
}
