use std::{collections::HashMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use log::warn;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use super::utils::{text_color_for_bgcolor, ToHexColorStr};
use crate::grid::Bucket;

/// The color schemes a hexagon picture can be drawn in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
  #[default]
  Blue,
  Green,
  Purple,
  Pink,
  Orange,
  Teal,
  Dark,
}

impl ThemeId {
  pub const ALL: [ThemeId; 7] = [
    ThemeId::Blue,
    ThemeId::Green,
    ThemeId::Purple,
    ThemeId::Pink,
    ThemeId::Orange,
    ThemeId::Teal,
    ThemeId::Dark,
  ];

  pub fn name(&self) -> &'static str {
    use ThemeId::*;
    match self {
      Blue => "blue",
      Green => "green",
      Purple => "purple",
      Pink => "pink",
      Orange => "orange",
      Teal => "teal",
      Dark => "dark",
    }
  }

  /// Resolves a hex theme id, or one of the application's page theme ids.
  pub fn lookup(name: &str) -> Option<ThemeId> {
    use ThemeId::*;
    match name.trim().to_lowercase().as_str() {
      "blue" | "default" => Some(Blue),
      "green" | "forest" => Some(Green),
      "purple" => Some(Purple),
      "pink" => Some(Pink),
      "orange" | "sunset" => Some(Orange),
      "teal" | "ocean" => Some(Teal),
      "dark" => Some(Dark),
      _ => None,
    }
  }

  /// Like [`Self::lookup`], but unknown names fall back to blue.
  pub fn from_name(name: &str) -> ThemeId {
    Self::lookup(name).unwrap_or_else(|| {
      warn!("unknown theme '{name}', falling back to blue");
      ThemeId::Blue
    })
  }

  pub fn colors(&self, bucket: Bucket) -> ColorTriple {
    THEMES[self].for_bucket(bucket)
  }
}

impl Display for ThemeId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Fill, stroke and text color of one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTriple {
  pub fill: Srgb<u8>,
  pub stroke: Srgb<u8>,
  pub text: Srgb<u8>,
}

impl ColorTriple {
  pub fn fill_hex(&self) -> String {
    self.fill.to_hex_color()
  }

  pub fn stroke_hex(&self) -> String {
    self.stroke.to_hex_color()
  }

  pub fn text_hex(&self) -> String {
    self.text.to_hex_color()
  }
}

struct ThemePalette {
  center: ColorTriple,
  oft: ColorTriple,
  manchmal: ColorTriple,
}

impl ThemePalette {
  fn for_bucket(&self, bucket: Bucket) -> ColorTriple {
    match bucket {
      Bucket::Center => self.center,
      Bucket::Oft => self.oft,
      Bucket::Manchmal => self.manchmal,
    }
  }
}

fn rgb(s: &str) -> Srgb<u8> {
  Srgb::<u8>::from_str(s).expect("invalid color literal in theme table")
}

/// Light themes: saturated center, tinted oft tiles, pale manchmal tiles.
/// Colors are `[primary, oft fill, manchmal fill, dark text]`.
fn light_theme(colors: [&str; 4]) -> ThemePalette {
  let [primary, oft_fill, manchmal_fill, dark_text] = colors.map(rgb);
  let white = Srgb::new(255, 255, 255);
  ThemePalette {
    center: ColorTriple {
      fill: primary,
      stroke: primary,
      text: white,
    },
    oft: ColorTriple {
      fill: oft_fill,
      stroke: primary,
      text: dark_text,
    },
    manchmal: ColorTriple {
      fill: manchmal_fill,
      stroke: primary,
      text: dark_text,
    },
  }
}

// dark fills pick their own legible text color
fn dark_theme(primary: &str, oft_fill: &str, manchmal_fill: &str) -> ThemePalette {
  let primary = rgb(primary);
  let triple = |fill: Srgb<u8>| ColorTriple {
    fill,
    stroke: primary,
    text: text_color_for_bgcolor(fill),
  };
  ThemePalette {
    center: triple(primary),
    oft: triple(rgb(oft_fill)),
    manchmal: triple(rgb(manchmal_fill)),
  }
}

lazy_static! {
  static ref THEMES: HashMap<ThemeId, ThemePalette> = {
    use ThemeId::*;
    let mut m = HashMap::new();
    m.insert(Blue, light_theme(["#3B82F6", "#BFDBFE", "#DBEAFE", "#1E40AF"]));
    m.insert(Green, light_theme(["#10B981", "#A7F3D0", "#D1FAE5", "#065F46"]));
    m.insert(Purple, light_theme(["#8B5CF6", "#DDD6FE", "#EDE9FE", "#5B21B6"]));
    m.insert(Pink, light_theme(["#EC4899", "#FBCFE8", "#FCE7F3", "#9F1239"]));
    m.insert(Orange, light_theme(["#F97316", "#FED7AA", "#FFEDD5", "#9A3412"]));
    m.insert(Teal, light_theme(["#14B8A6", "#99F6E4", "#CCFBF1", "#115E59"]));
    m.insert(Dark, dark_theme("#60A5FA", "#334155", "#1E293B"));
    m
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_theme_has_a_palette() {
    for theme in ThemeId::ALL {
      for bucket in [Bucket::Center, Bucket::Oft, Bucket::Manchmal] {
        let c = theme.colors(bucket);
        assert_eq!(c.fill_hex().len(), 7);
      }
    }
  }

  #[test]
  fn default_theme_is_blue() {
    assert_eq!(ThemeId::default(), ThemeId::Blue);
    assert_eq!(ThemeId::default().name(), "blue");
  }

  #[test]
  fn blue_center_is_primary_with_white_text() {
    let c = ThemeId::Blue.colors(Bucket::Center);
    assert_eq!(c.fill_hex(), "#3b82f6");
    assert_eq!(c.stroke_hex(), "#3b82f6");
    assert_eq!(c.text_hex(), "#ffffff");

    let m = ThemeId::Blue.colors(Bucket::Manchmal);
    assert_eq!(m.fill_hex(), "#dbeafe");
    assert_eq!(m.text_hex(), "#1e40af");
  }

  #[test]
  fn oft_and_manchmal_fills_differ() {
    for theme in ThemeId::ALL {
      assert_ne!(theme.colors(Bucket::Oft).fill, theme.colors(Bucket::Manchmal).fill);
    }
  }

  #[test]
  fn dark_theme_uses_light_text() {
    for bucket in [Bucket::Center, Bucket::Oft, Bucket::Manchmal] {
      assert_eq!(ThemeId::Dark.colors(bucket).text_hex(), "#ffffff");
    }
  }

  #[test]
  fn names_resolve_including_page_themes() {
    assert_eq!(ThemeId::from_name("green"), ThemeId::Green);
    assert_eq!(ThemeId::from_name("Ocean"), ThemeId::Teal);
    assert_eq!(ThemeId::from_name("sunset"), ThemeId::Orange);
    assert_eq!(ThemeId::from_name("forest"), ThemeId::Green);
    assert_eq!(ThemeId::from_name("default"), ThemeId::Blue);
    assert_eq!(ThemeId::from_name(" DARK "), ThemeId::Dark);
    for theme in ThemeId::ALL {
      assert_eq!(ThemeId::from_name(theme.name()), theme);
    }
  }

  #[test]
  fn unknown_theme_falls_back_to_blue() {
    assert_eq!(ThemeId::lookup("chartreuse"), None);
    assert_eq!(ThemeId::from_name("chartreuse"), ThemeId::Blue);
    assert_eq!(ThemeId::from_name(""), ThemeId::Blue);
  }
}
