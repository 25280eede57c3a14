/// Placement of adjective cards on a hex grid around the anchor tile.
pub mod packer;
pub mod placement;
pub mod random;

pub use packer::{pack, pack_with};
pub use placement::{Bucket, Card, GridBounds, Placement, PlacementMap, ANCHOR_WORD};
pub use random::{reshuffle_seed, EntropySource, Lcg, UnitRandom, PREVIEW_SEED};
