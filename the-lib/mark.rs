//! Mark records as reported by the host and the buffers they point into.

use std::fmt;

use serde::{
  Deserialize,
  Serialize,
};

/// Every mark symbol the source lists by default, in listing order.
pub const DEFAULT_MARK_CHARS: &str =
  "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Whether `ch` can name a mark.
pub fn is_mark_char(ch: char) -> bool {
  ch.is_ascii_alphanumeric()
}

/// A single mark position as found in the host's mark listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
  /// The mark symbol.
  pub name: char,
  /// 1-based line recorded when the mark was set. May be stale.
  pub line: usize,
  /// 0-based column recorded by the host.
  pub col:  usize,
  /// Line text captured when the mark was set, or the file path for marks
  /// whose buffer is not loaded. Empty when the host reported nothing.
  pub text: String,
}

impl Mark {
  pub fn new(name: char, line: usize, col: usize, text: impl Into<String>) -> Self {
    Self {
      name,
      line,
      col,
      text: text.into(),
    }
  }

  /// 1-based column used for display and navigation.
  pub const fn display_col(&self) -> usize {
    self.col.saturating_add(1)
  }
}

/// Host buffer number.
///
/// `0` does not name a buffer: it means "whichever buffer is active", which
/// is what hosts report for buffer-local marks.
#[derive(
  Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BufferId(u32);

impl BufferId {
  pub const ACTIVE: BufferId = BufferId(0);

  pub const fn new(id: u32) -> Self {
    Self(id)
  }

  pub const fn get(self) -> u32 {
    self.0
  }

  pub const fn is_active_sentinel(self) -> bool {
    self.0 == 0
  }
}

impl From<u32> for BufferId {
  fn from(value: u32) -> Self {
    Self::new(value)
  }
}

impl fmt::Display for BufferId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Where a mark lives, as answered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferRef {
  pub id:      BufferId,
  /// Buffer content is resident and can be read line by line.
  pub loaded:  bool,
  /// The buffer is the one presently focused.
  pub current: bool,
}

impl BufferRef {
  /// Reference to the active buffer through the sentinel id.
  pub const fn active() -> Self {
    Self {
      id:      BufferId::ACTIVE,
      loaded:  true,
      current: true,
    }
  }

  pub const fn new(id: BufferId, loaded: bool, current: bool) -> Self {
    Self {
      id,
      loaded,
      current: current || id.is_active_sentinel(),
    }
  }
}
