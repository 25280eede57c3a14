/// Tile color schemes and small color helpers.
pub mod theme;
pub mod utils;

pub use theme::{ColorTriple, ThemeId};
pub use utils::{color_hex, text_color_for_bgcolor, ToHexColorStr};
