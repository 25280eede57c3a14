//! Sort results as handed over by the sorting page.
//!
//! The document lists the adjectives of the session and which bucket the
//! student dropped each one into. Only `oft` and `manchmal` end up on the
//! grid; `selten` is filtered out here.

use std::{collections::HashMap, fs, path::Path};

use error_stack::{IntoReport, Result, ResultExt};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{error::SelbstbildError, grid::Card};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBucket {
  Oft,
  Manchmal,
  Selten,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjective {
  pub id: i64,
  pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
  pub adjective_id: i64,
  pub bucket: SortBucket,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSession {
  #[serde(default)]
  pub adjectives: Vec<Adjective>,
  #[serde(default)]
  pub assignments: Vec<Assignment>,
}

/// The two card lists the packer consumes, in assignment order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortedCards {
  pub oft: Vec<Card>,
  pub manchmal: Vec<Card>,
}

impl SortSession {
  pub fn from_json(json: &str) -> Result<SortSession, SelbstbildError> {
    serde_json::from_str(json)
      .into_report()
      .change_context(SelbstbildError::SessionParseError)
  }

  pub fn load(path: &Path) -> Result<SortSession, SelbstbildError> {
    let contents = fs::read_to_string(path)
      .into_report()
      .change_context(SelbstbildError::SessionReadError)
      .attach_printable(format!("path: {}", path.display()))?;
    Self::from_json(&contents).attach_printable(format!("path: {}", path.display()))
  }

  pub fn cards(&self) -> SortedCards {
    let words: HashMap<i64, &str> = self
      .adjectives
      .iter()
      .map(|a| (a.id, a.word.as_str()))
      .collect();

    let mut sorted = SortedCards::default();
    for assignment in &self.assignments {
      let Some(word) = words.get(&assignment.adjective_id) else {
        warn!(
          "assignment refers to unknown adjective {}, skipping",
          assignment.adjective_id
        );
        continue;
      };
      let card = Card::new(assignment.adjective_id, word);
      match assignment.bucket {
        SortBucket::Oft => sorted.oft.push(card),
        SortBucket::Manchmal => sorted.manchmal.push(card),
        SortBucket::Selten => {}
      }
    }
    sorted
  }
}
