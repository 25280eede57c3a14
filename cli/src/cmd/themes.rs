use error_stack::Result;

use selbstbild_core::{Bucket, SelbstbildError, ThemeId};

pub fn run_themes() -> Result<(), SelbstbildError> {
  for theme in ThemeId::ALL {
    let fills = [Bucket::Center, Bucket::Oft, Bucket::Manchmal]
      .map(|b| theme.colors(b).fill_hex())
      .join(" ");
    println!("{:<8}{fills}", theme.name());
  }
  Ok(())
}
