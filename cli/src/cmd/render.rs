use std::{fs, path::Path};

use error_stack::{IntoReport, Result, ResultExt};
use log::{debug, info};

use selbstbild_core::{
  config::validate_hex_size, pack, render, RenderConfig, SelbstbildError, SortSession, ThemeId,
};

use super::SeedArgs;

pub fn run_render(
  session_path: &Path,
  output: Option<&Path>,
  config_path: Option<&Path>,
  theme: Option<&str>,
  hex_size: Option<f64>,
  seed_args: &SeedArgs,
) -> Result<(), SelbstbildError> {
  let mut config = match config_path {
    Some(path) => RenderConfig::load(path)?,
    None => RenderConfig::default(),
  };
  if let Some(name) = theme {
    config.theme = ThemeId::from_name(name);
  }
  if let Some(size) = hex_size {
    config.hex_size = validate_hex_size(size)?;
  }
  debug!("render config: {config:?}");

  let session = SortSession::load(session_path)?;
  let cards = session.cards();
  let seed = seed_args.resolve(config.seed);

  let map = pack(&cards.oft, &cards.manchmal, Some(seed));
  let svg = render(&map, config.theme, config.hex_size).to_svg();

  match output {
    Some(path) => {
      fs::write(path, svg)
        .into_report()
        .change_context(SelbstbildError::OutputWriteError)
        .attach_printable(format!("path: {}", path.display()))?;
      info!("wrote {} tiles to {}", map.len(), path.display());
    }
    None => print!("{svg}"),
  }
  Ok(())
}
