/// Styling and text layout for a single hexagon tile.
pub mod text;

use serde::Serialize;

use crate::{
  color::ThemeId,
  geometry::{hexagon_outline, Float},
  grid::Bucket,
};

pub use text::{font_size_for, layout_text, split_lines, TextLayout, TextLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
  Normal,
  Bold,
}

impl FontWeight {
  pub fn for_bucket(bucket: Bucket) -> FontWeight {
    if bucket.is_bold() {
      FontWeight::Bold
    } else {
      FontWeight::Normal
    }
  }

  pub fn css(&self) -> &'static str {
    match self {
      FontWeight::Normal => "normal",
      FontWeight::Bold => "bold",
    }
  }
}

/// Outline width, thicker for more important buckets.
pub fn stroke_width(bucket: Bucket) -> Float {
  match bucket {
    Bucket::Center => 3.0,
    Bucket::Oft => 2.0,
    Bucket::Manchmal => 1.5,
  }
}

/// Everything needed to draw one tile centered on the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileVisual {
  pub outline: String,
  /// Text is clipped to this path so glyphs never leave the hexagon.
  pub clip: String,
  pub fill: String,
  pub stroke: String,
  pub text_color: String,
  pub stroke_width: Float,
  pub font_weight: FontWeight,
  pub font_size: Float,
  pub line_height: Float,
  pub lines: Vec<TextLine>,
}

pub fn layout_tile(word: &str, bucket: Bucket, theme: ThemeId, size: Float) -> TileVisual {
  let colors = theme.colors(bucket);
  let outline = hexagon_outline(size);
  let TextLayout {
    font_size,
    line_height,
    lines,
  } = layout_text(word, size);

  TileVisual {
    clip: outline.clone(),
    outline,
    fill: colors.fill_hex(),
    stroke: colors.stroke_hex(),
    text_color: colors.text_hex(),
    stroke_width: stroke_width(bucket),
    font_weight: FontWeight::for_bucket(bucket),
    font_size,
    line_height,
    lines,
  }
}
