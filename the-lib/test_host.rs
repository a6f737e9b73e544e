//! In-memory [`MarkHost`] used by the unit tests.

use std::{
  cell::RefCell,
  collections::{
    HashMap,
    HashSet,
  },
  path::{
    Path,
    PathBuf,
  },
};

use crate::{
  host::{
    HostError,
    MarkHost,
    Result,
  },
  mark::{
    BufferId,
    BufferRef,
  },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  ListMarks(String),
  DeleteMarks(String),
  Persist,
  JumpTo(PathBuf, usize, usize),
}

pub struct TestBuffer {
  pub name:   String,
  pub loaded: bool,
  pub lines:  Vec<String>,
}

#[derive(Default)]
pub struct TestHost {
  pub active:       u32,
  pub buffers:      HashMap<u32, TestBuffer>,
  /// Mark symbol to reported buffer number (0 for buffer-local marks).
  pub mark_buffers: HashMap<char, u32>,
  pub listing:      Option<String>,
  pub readable:     HashSet<PathBuf>,
  pub fail_delete:  bool,
  pub calls:        RefCell<Vec<Call>>,
}

impl TestHost {
  pub fn new(active: u32, name: &str, lines: &[&str]) -> Self {
    let mut host = Self {
      active,
      ..Default::default()
    };
    host.add_buffer(active, name, true, lines);
    host
  }

  pub fn add_buffer(&mut self, id: u32, name: &str, loaded: bool, lines: &[&str]) {
    self.buffers.insert(id, TestBuffer {
      name: name.to_string(),
      loaded,
      lines: lines.iter().map(|l| l.to_string()).collect(),
    });
  }

  pub fn calls(&self) -> Vec<Call> {
    self.calls.borrow().clone()
  }

  fn buffer(&self, id: BufferId) -> Option<&TestBuffer> {
    let id = if id.is_active_sentinel() {
      self.active
    } else {
      id.get()
    };
    self.buffers.get(&id)
  }
}

impl MarkHost for TestHost {
  fn list_marks(&self, chars: &str) -> Result<String> {
    self
      .calls
      .borrow_mut()
      .push(Call::ListMarks(chars.to_string()));
    self
      .listing
      .clone()
      .ok_or_else(|| HostError::NoMarks(chars.to_string()))
  }

  fn locate(&self, mark: char) -> BufferRef {
    let id = self.mark_buffers.get(&mark).copied().unwrap_or(0);
    let loaded = id == 0 || self.buffers.get(&id).is_some_and(|b| b.loaded);
    BufferRef::new(BufferId::new(id), loaded, id == self.active)
  }

  fn read_line(&self, buffer: BufferId, line: usize) -> Option<String> {
    let buffer = self.buffer(buffer).filter(|b| b.loaded)?;
    buffer.lines.get(line.checked_sub(1)?).cloned()
  }

  fn buffer_name(&self, buffer: BufferId) -> String {
    self
      .buffer(buffer)
      .map(|b| b.name.clone())
      .unwrap_or_default()
  }

  fn to_absolute(&self, path: &str) -> PathBuf {
    the_marks_stdx::path::absolute(path, Path::new("/work"))
  }

  fn file_readable(&self, path: &Path) -> bool {
    self.readable.contains(path)
  }

  fn delete_marks(&mut self, marks: &str) -> Result<()> {
    self
      .calls
      .borrow_mut()
      .push(Call::DeleteMarks(marks.to_string()));
    if self.fail_delete {
      return Err(HostError::command(
        format!("delmarks {marks}"),
        "E475: Invalid argument",
      ));
    }
    for mark in marks.chars() {
      self.mark_buffers.remove(&mark);
    }
    Ok(())
  }

  fn persist_mark_state(&mut self) -> Result<()> {
    self.calls.borrow_mut().push(Call::Persist);
    Ok(())
  }

  fn jump_to(&mut self, path: &Path, line: usize, col: usize) -> Result<()> {
    self
      .calls
      .borrow_mut()
      .push(Call::JumpTo(path.to_path_buf(), line, col));
    Ok(())
  }
}
