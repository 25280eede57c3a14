use std::path::Path;

use error_stack::Result;

use selbstbild_core::{pack, SelbstbildError, SortSession};

use super::SeedArgs;

pub fn run_layout(session_path: &Path, seed_args: &SeedArgs) -> Result<(), SelbstbildError> {
  let cards = SortSession::load(session_path)?.cards();
  let map = pack(&cards.oft, &cards.manchmal, Some(seed_args.resolve(None)));

  for p in map.iter() {
    println!("{:>8}  {:<8}  {}", p.hex.key(), p.bucket.name(), p.card.word);
  }
  Ok(())
}
