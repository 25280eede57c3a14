use palette::{IntoColor, Srgb, Xyz};

/// Returns the color as a CSS-compatible hex string, with `#` prefix.
pub fn color_hex(col: Srgb<u8>) -> String {
  format!("#{:02x}{:02x}{:02x}", col.red, col.green, col.blue)
}

/// Returns a legible text color for the given background color.
///
/// Returns white for "dark" colors (luminance < 0.5) and black for "bright" colors.
pub fn text_color_for_bgcolor(bg: Srgb<u8>) -> Srgb<u8> {
  let rgb: Srgb = bg.into_format();
  let xyz: Xyz = rgb.into_color();
  let luminance = xyz.y;
  if luminance < 0.5 {
    Srgb::new(255, 255, 255)
  } else {
    Srgb::new(0, 0, 0)
  }
}

pub trait ToHexColorStr {
  fn to_hex_color(&self) -> String;
}

impl ToHexColorStr for Srgb<u8> {
  fn to_hex_color(&self) -> String {
    color_hex(*self)
  }
}
