//! User configuration for the mark source.
//!
//! Read from `config.toml` in the config directory. Every field is optional;
//! missing fields keep their defaults.
//!
//! ```toml
//! mark-chars = "abcABC"
//! header-lines = 2
//! malformed = "abort"
//! syntax-name = "deniteSource_marks"
//! ```

use std::{
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::{
  listing::{
    DEFAULT_HEADER_LINES,
    ListingOptions,
    MalformedPolicy,
  },
  mark::{
    DEFAULT_MARK_CHARS,
    is_mark_char,
  },
};

const APP_DIR: &str = "the-marks";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config: {0}")]
  Io(#[from] io::Error),
  #[error("bad config: {0}")]
  BadConfig(#[from] toml::de::Error),
  #[error("`{0}` cannot name a mark")]
  InvalidMarkChar(char),
  #[error("mark `{0}` is listed more than once")]
  DuplicateMarkChar(char),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct MarksConfig {
  /// Marks to list, in listing order.
  pub mark_chars:   String,
  /// Lines to skip at the top of the host's listing.
  pub header_lines: usize,
  pub malformed:    MalformedPolicy,
  /// Syntax group the highlight rules are registered under.
  pub syntax_name:  String,
}

impl Default for MarksConfig {
  fn default() -> Self {
    Self {
      mark_chars:   DEFAULT_MARK_CHARS.to_string(),
      header_lines: DEFAULT_HEADER_LINES,
      malformed:    MalformedPolicy::default(),
      syntax_name:  "deniteSource_marks".to_string(),
    }
  }
}

impl MarksConfig {
  pub fn from_toml(source: &str) -> Result<Self> {
    let config: Self = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
  }

  /// Loads `path`, falling back to the defaults when it does not exist.
  pub fn load(path: &Path) -> Result<Self> {
    match fs::read_to_string(path) {
      Ok(source) => Self::from_toml(&source),
      Err(err) if err.kind() == io::ErrorKind::NotFound => {
        log::debug!("no config at {}, using defaults", path.display());
        Ok(Self::default())
      },
      Err(err) => Err(err.into()),
    }
  }

  pub fn load_default() -> Result<Self> {
    Self::load(&default_config_file())
  }

  pub fn listing_options(&self) -> ListingOptions<'_> {
    ListingOptions {
      chars:        &self.mark_chars,
      header_lines: self.header_lines,
      malformed:    self.malformed,
    }
  }

  fn validate(&self) -> Result<()> {
    let mut seen = Vec::with_capacity(self.mark_chars.len());
    for ch in self.mark_chars.chars() {
      if !is_mark_char(ch) {
        return Err(ConfigError::InvalidMarkChar(ch));
      }
      if seen.contains(&ch) {
        return Err(ConfigError::DuplicateMarkChar(ch));
      }
      seen.push(ch);
    }
    Ok(())
  }
}

pub fn config_dir() -> PathBuf {
  match choose_base_strategy() {
    Ok(strategy) => strategy.config_dir().join(APP_DIR),
    Err(err) => {
      log::warn!("could not determine config directory: {err}");
      PathBuf::from(".").join(APP_DIR)
    },
  }
}

pub fn cache_dir() -> PathBuf {
  match choose_base_strategy() {
    Ok(strategy) => strategy.cache_dir().join(APP_DIR),
    Err(err) => {
      log::warn!("could not determine cache directory: {err}");
      PathBuf::from(".").join(APP_DIR)
    },
  }
}

pub fn default_config_file() -> PathBuf {
  config_dir().join("config.toml")
}

pub fn default_log_file() -> PathBuf {
  cache_dir().join("the-marks.log")
}
