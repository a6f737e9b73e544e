//! Display rows produced for the selection framework.

use std::path::{
  Path,
  PathBuf,
};

use serde::Serialize;

/// How a mark was resolved against the host's buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum MarkState {
  /// The mark belongs to the active buffer.
  Current,
  /// The mark's buffer is loaded. `line_valid` is false when the buffer has
  /// shrunk below the recorded line.
  Loaded { line_valid: bool },
  /// The buffer is not loaded but its file is readable on disk.
  OnDisk,
  /// Neither a loaded buffer nor a readable file backs the mark.
  Invalid,
}

impl MarkState {
  /// Whether the preview shows the `-[...]-` fallback.
  pub const fn is_flagged(self) -> bool {
    matches!(self, Self::Invalid | Self::Loaded { line_valid: false })
  }
}

/// A resolved mark, ready to be listed and acted upon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMarkEntry {
  pub mark:        char,
  /// Row text shown in the list.
  pub word:        String,
  pub preview:     String,
  /// Path as the host reported it, before absolutization.
  pub path:        String,
  pub target_path: PathBuf,
  /// 1-based.
  pub line:        usize,
  /// 1-based.
  pub col:         usize,
  pub is_current:  bool,
  #[serde(flatten)]
  pub state:       MarkState,
}

impl ResolvedMarkEntry {
  /// Secondary description column: preview followed by the raw path.
  pub fn attr(&self) -> String {
    format!("{} {}", self.preview, self.path)
  }

  pub fn target(&self) -> JumpTarget<'_> {
    JumpTarget {
      path: &self.target_path,
      line: self.line,
      col:  self.col,
    }
  }
}

/// Navigation coordinates of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpTarget<'a> {
  pub path: &'a Path,
  pub line: usize,
  pub col:  usize,
}

/// Row text for a mark: symbol (with `#` when current) padded to two
/// columns, the position right-aligned, then the preview.
pub fn format_word(mark: char, is_current: bool, line: usize, col: usize, preview: &str) -> String {
  let symbol = if is_current {
    format!("{mark}#")
  } else {
    mark.to_string()
  };
  format!("{symbol:<2}  {line:>4}:{col:<3}  {preview}")
}

/// Preview for a mark whose live text is gone.
pub fn flagged_preview(text: &str) -> String {
  format!("-[{text}]-")
}
