//! Hex-grid self-portrait ("Selbstbild") built from sorted adjective cards.
//!
//! Cards sorted into `oft` and `manchmal` are packed around an
//! "Ich bin" anchor tile, laid out as themed hexagon tiles and rendered to SVG.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod session;
pub mod tile;
pub mod view;

pub use color::ThemeId;
pub use config::RenderConfig;
pub use error::SelbstbildError;
pub use grid::{pack, Bucket, Card, PlacementMap};
pub use session::SortSession;
pub use view::{render, GridView};
