mod layout;
mod render;
mod themes;

use clap::{Args, Subcommand};
use error_stack::Result;
use log::info;
use std::path::PathBuf;

use selbstbild_core::{
  grid::{reshuffle_seed, PREVIEW_SEED},
  SelbstbildError,
};

use self::{layout::run_layout, render::run_render, themes::run_themes};

/// How the packer gets seeded.
#[derive(Args)]
pub struct SeedArgs {
  /// Seed for a reproducible arrangement
  #[clap(long, value_parser, conflicts_with = "preview")]
  seed: Option<u64>,

  /// Use the fixed preview seed, so the picture matches the live preview
  #[clap(long, action)]
  preview: bool,
}

impl SeedArgs {
  /// Explicit flags win over the configured seed. With neither, a fresh
  /// seed is drawn and logged so the arrangement can be reproduced.
  pub fn resolve(&self, configured: Option<u64>) -> u64 {
    if let Some(seed) = self.seed {
      return seed;
    }
    if self.preview {
      return PREVIEW_SEED;
    }
    configured.unwrap_or_else(|| {
      let seed = reshuffle_seed();
      info!("shuffled arrangement, use --seed {seed} to get it again");
      seed
    })
  }
}

#[derive(Subcommand)]
pub enum CliCommand {
  /// Renders a sort session as an SVG hexagon picture
  Render {
    #[clap(value_parser)]
    session: PathBuf,

    /// Output file. Writes to stdout if omitted.
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,

    /// INI file with a [render] section
    #[clap(long, value_parser)]
    config: Option<PathBuf>,

    /// Color theme (blue, green, purple, pink, orange, teal, dark)
    #[clap(long, value_parser)]
    theme: Option<String>,

    /// Hexagon size (center to corner)
    #[clap(long, value_parser)]
    hex_size: Option<f64>,

    #[clap(flatten)]
    seed: SeedArgs,
  },

  /// Prints where each card lands on the grid
  Layout {
    #[clap(value_parser)]
    session: PathBuf,

    #[clap(flatten)]
    seed: SeedArgs,
  },

  /// Lists the available color themes
  Themes,
}

impl CliCommand {
  pub fn run(&self) -> Result<(), SelbstbildError> {
    match self {
      Self::Render {
        session,
        output,
        config,
        theme,
        hex_size,
        seed,
      } => run_render(
        session,
        output.as_deref(),
        config.as_deref(),
        theme.as_deref(),
        *hex_size,
        seed,
      ),

      Self::Layout { session, seed } => run_layout(session, seed),

      Self::Themes => run_themes(),
    }
  }
}
