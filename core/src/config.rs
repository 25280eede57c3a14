/// Render settings, read from an INI file such as:
///
/// ```ini
/// [render]
/// theme = green
/// hex_size = 60
/// seed = 42
/// ```
use std::{fs, path::Path};

use error_stack::{report, IntoReport, Result, ResultExt};
use ini::{Ini, Properties};

use crate::{color::ThemeId, error::SelbstbildError, geometry::Float};

pub const RENDER_SECTION: &str = "render";
pub const DEFAULT_HEX_SIZE: Float = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
  pub theme: ThemeId,
  pub hex_size: Float,
  pub seed: Option<u64>,
}

impl Default for RenderConfig {
  fn default() -> Self {
    RenderConfig {
      theme: ThemeId::default(),
      hex_size: DEFAULT_HEX_SIZE,
      seed: None,
    }
  }
}

fn parse_hex_size(s: &str) -> Result<Float, SelbstbildError> {
  let size: Float = s
    .trim()
    .parse()
    .into_report()
    .change_context(SelbstbildError::InvalidConfigValue(format!("hex_size = {s}")))?;
  validate_hex_size(size)
}

pub fn validate_hex_size(size: Float) -> Result<Float, SelbstbildError> {
  if size.is_finite() && size > 0.0 {
    Ok(size)
  } else {
    Err(report!(SelbstbildError::InvalidConfigValue(format!(
      "hex_size must be a positive number, got {size}"
    ))))
  }
}

fn parse_seed(s: &str) -> Result<u64, SelbstbildError> {
  s.trim()
    .parse()
    .into_report()
    .change_context(SelbstbildError::InvalidConfigValue(format!("seed = {s}")))
}

impl RenderConfig {
  fn from_ini_section(props: &Properties) -> Result<RenderConfig, SelbstbildError> {
    let defaults = RenderConfig::default();
    Ok(RenderConfig {
      theme: props
        .get("theme")
        .map(ThemeId::from_name)
        .unwrap_or(defaults.theme),
      hex_size: match props.get("hex_size") {
        Some(val) => parse_hex_size(val)?,
        None => defaults.hex_size,
      },
      seed: match props.get("seed") {
        Some(val) => Some(parse_seed(val)?),
        None => defaults.seed,
      },
    })
  }

  pub fn from_ini_str(s: &str) -> Result<RenderConfig, SelbstbildError> {
    let ini = Ini::load_from_str(s).map_err(|e| {
      report!(SelbstbildError::ConfigParseError).attach_printable(format!("ini parse error: {e}"))
    })?;

    match ini.section(Some(RENDER_SECTION.to_string())) {
      Some(section) => Self::from_ini_section(section),
      None => Ok(RenderConfig::default()),
    }
  }

  pub fn load(path: &Path) -> Result<RenderConfig, SelbstbildError> {
    let contents = fs::read_to_string(path)
      .into_report()
      .change_context(SelbstbildError::ConfigReadError)
      .attach_printable(format!("path: {}", path.display()))?;
    Self::from_ini_str(&contents).attach_printable(format!("path: {}", path.display()))
  }
}
