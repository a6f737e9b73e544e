//! The editor surface the mark source talks to.
//!
//! Nothing in this crate reaches for editor state directly. Every query and
//! every side effect goes through [`MarkHost`], so a real editor adapter and a
//! test double can be swapped freely.

use std::path::{
  Path,
  PathBuf,
};

use thiserror::Error;

use crate::mark::{
  BufferId,
  BufferRef,
};

#[derive(Debug, Error)]
pub enum HostError {
  #[error("host command `{command}` failed: {message}")]
  Command { command: String, message: String },
  #[error("no marks match `{0}`")]
  NoMarks(String),
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

impl HostError {
  pub fn command(command: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Command {
      command: command.into(),
      message: message.into(),
    }
  }
}

pub type Result<T> = std::result::Result<T, HostError>;

/// Queries and commands a host editor provides for mark listing.
///
/// Buffer arguments may be [`BufferId::ACTIVE`], which always refers to the
/// focused buffer.
pub trait MarkHost {
  /// Raw `:marks` style dump for the given symbols, header included.
  fn list_marks(&self, chars: &str) -> Result<String>;

  /// Which buffer the mark points into.
  fn locate(&self, mark: char) -> BufferRef;

  /// Live text of the 1-based `line`, or `None` when the buffer is shorter
  /// than that or cannot be read.
  fn read_line(&self, buffer: BufferId, line: usize) -> Option<String>;

  /// Name of the buffer as the host displays it. May be relative.
  fn buffer_name(&self, buffer: BufferId) -> String;

  /// Full path for a host path string.
  fn to_absolute(&self, path: &str) -> PathBuf;

  fn file_readable(&self, path: &Path) -> bool;

  /// Removes every mark in `marks` in one command.
  fn delete_marks(&mut self, marks: &str) -> Result<()>;

  /// Writes the host's mark state to its persistent store.
  fn persist_mark_state(&mut self) -> Result<()>;

  /// Moves the cursor to `path` at 1-based `line` and `col`, opening the file
  /// when needed.
  fn jump_to(&mut self, path: &Path, line: usize, col: usize) -> Result<()>;
}
