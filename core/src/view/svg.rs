use super::{GridView, PositionedTile, Viewport};
use crate::geometry::svg_num;

const CLIP_ID: &str = "hex-clip";
const EMPTY_CAPTION: &str = "Keine Adjektive sortiert";

/// Escapes text for use in SVG element content and attribute values.
pub fn escape_xml(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&apos;"),
      _ => out.push(c),
    }
  }
  out
}

fn svg_open(viewport: &Viewport) -> String {
  format!(
    "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n",
    svg_num(viewport.x),
    svg_num(viewport.y),
    svg_num(viewport.width),
    svg_num(viewport.height),
    svg_num(viewport.width),
    svg_num(viewport.height),
  )
}

fn tile_svg(tile: &PositionedTile) -> String {
  let v = &tile.visual;
  let mut out = format!(
    "  <g transform=\"translate({}, {})\">\n",
    svg_num(tile.center.x),
    svg_num(tile.center.y)
  );
  out.push_str(&format!(
    "    <path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
    v.outline,
    v.fill,
    v.stroke,
    svg_num(v.stroke_width)
  ));

  if !v.lines.is_empty() {
    out.push_str(&format!("    <g clip-path=\"url(#{CLIP_ID})\">\n"));
    for line in &v.lines {
      out.push_str(&format!(
        "      <text x=\"0\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"{}\" font-size=\"{}\" font-weight=\"{}\">{}</text>\n",
        svg_num(line.y),
        v.text_color,
        svg_num(v.font_size),
        v.font_weight.css(),
        escape_xml(&line.text)
      ));
    }
    out.push_str("    </g>\n");
  }

  out.push_str("  </g>\n");
  out
}

impl GridView {
  /// Renders the view as a standalone SVG document.
  pub fn to_svg(&self) -> String {
    let mut out = svg_open(&self.viewport);

    let Some(first) = self.tiles.first() else {
      let v = &self.viewport;
      out.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"#6b7280\">{EMPTY_CAPTION}</text>\n",
        svg_num(v.x + v.width / 2.0),
        svg_num(v.y + v.height / 2.0)
      ));
      out.push_str("</svg>\n");
      return out;
    };

    // all tiles share one size, so one clip path serves them all
    out.push_str(&format!(
      "  <defs>\n    <clipPath id=\"{CLIP_ID}\">\n      <path d=\"{}\"/>\n    </clipPath>\n  </defs>\n",
      first.visual.clip
    ));
    for tile in &self.tiles {
      out.push_str(&tile_svg(tile));
    }
    out.push_str("</svg>\n");
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    color::ThemeId,
    grid::{pack, Card, PlacementMap},
    view::render,
  };

  #[test]
  fn escapes_markup_characters() {
    assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    assert_eq!(escape_xml("fröhlich"), "fröhlich");
  }

  #[test]
  fn empty_view_shows_caption() {
    let svg = render(&PlacementMap::new(), ThemeId::Blue, 60.0).to_svg();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("viewBox=\"0 0 200 200\""));
    assert!(svg.contains("Keine Adjektive sortiert"));
    assert!(!svg.contains("<clipPath"));
  }

  #[test]
  fn document_has_one_group_per_tile() {
    let map = pack(
      &[Card::new(1, "mutig"), Card::new(2, "ehrlich")],
      &[Card::new(3, "unglaublichfreundlich")],
      Some(42),
    );
    let svg = render(&map, ThemeId::Blue, 60.0).to_svg();
    assert_eq!(svg.matches("<g transform=").count(), 4);
    assert_eq!(svg.matches("<clipPath").count(), 1);
    assert_eq!(svg.matches("clip-path=\"url(#hex-clip)\"").count(), 4);
    assert!(svg.contains(">Ich bin</text>"));
    assert!(svg.contains(">unglaub-</text>"));
    assert!(svg.contains("font-weight=\"bold\""));
    assert!(svg.contains("font-weight=\"normal\""));
    assert!(svg.trim_end().ends_with("</svg>"));
  }

  #[test]
  fn words_are_escaped_in_output() {
    let map = pack(&[Card::new(1, "<b>&")], &[], Some(1));
    let svg = render(&map, ThemeId::Green, 60.0).to_svg();
    assert!(svg.contains(">&lt;b&gt;&amp;</text>"));
    assert!(!svg.contains("<b>"));
  }
}
