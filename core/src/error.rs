use error_stack::Context;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelbstbildError {
  SessionReadError,
  SessionParseError,

  ConfigReadError,
  ConfigParseError,
  InvalidConfigValue(String),

  OutputWriteError,
}

impl Context for SelbstbildError {}

impl Display for SelbstbildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use SelbstbildError::*;
    match self {
      SessionReadError => write!(f, "unable to read sort session"),

      SessionParseError => write!(f, "invalid sort session document"),

      ConfigReadError => write!(f, "unable to read render config"),

      ConfigParseError => write!(f, "invalid render config file"),

      InvalidConfigValue(msg) => write!(f, "invalid render config value: {msg}"),

      OutputWriteError => write!(f, "unable to write output"),
    }
  }
}
