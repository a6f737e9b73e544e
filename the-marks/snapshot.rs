//! A [`MarkHost`] backed by a JSON dump of an editor session.
//!
//! The snapshot stands in for a live editor: it carries the buffer list, the
//! active buffer and the mark table. Deleting marks edits the in-memory copy,
//! and persisting writes it back to the file it came from.

use std::{
  fs,
  io::Write,
  path::{
    Path,
    PathBuf,
  },
};

use anyhow::{
  Context,
  Result,
};
use serde::{
  Deserialize,
  Serialize,
};
use the_marks_lib::{
  host::{
    self,
    HostError,
    MarkHost,
  },
  mark::{
    BufferId,
    BufferRef,
    is_mark_char,
  },
};
use the_marks_stdx::{
  env::current_working_dir,
  path,
};

const LISTING_HEADER: &str = "\nmark line  col file/text";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
  /// Directory relative buffer names are resolved against. Defaults to the
  /// process working directory.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cwd:       Option<PathBuf>,
  pub active:    u32,
  #[serde(default)]
  pub buffers:   Vec<BufferSnapshot>,
  #[serde(default)]
  pub marks:     Vec<MarkSnapshot>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_jump: Option<JumpRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferSnapshot {
  pub id:     u32,
  pub name:   String,
  #[serde(default = "loaded_by_default")]
  pub loaded: bool,
  #[serde(default)]
  pub lines:  Vec<String>,
}

fn loaded_by_default() -> bool {
  true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkSnapshot {
  pub mark:   char,
  /// `None` for buffer-local marks, which always live in the active buffer.
  #[serde(default)]
  pub buffer: Option<u32>,
  pub line:   usize,
  /// 0-based.
  pub col:    usize,
  /// Line text, or the file path when the buffer is not loaded.
  #[serde(default)]
  pub text:   String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpRecord {
  pub path: PathBuf,
  pub line: usize,
  pub col:  usize,
}

pub struct SnapshotHost {
  snapshot: Snapshot,
  file:     PathBuf,
  cwd:      PathBuf,
}

impl SnapshotHost {
  pub fn open(file: impl Into<PathBuf>) -> Result<Self> {
    let file = file.into();
    let source = fs::read_to_string(&file)
      .with_context(|| format!("failed to read snapshot {}", file.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&source)
      .with_context(|| format!("failed to parse snapshot {}", file.display()))?;
    Self::new(snapshot, file)
  }

  pub fn new(snapshot: Snapshot, file: PathBuf) -> Result<Self> {
    let cwd = match &snapshot.cwd {
      Some(cwd) => cwd.clone(),
      None => current_working_dir().map_err(|err| anyhow::anyhow!("{err:#}"))?,
    };
    Ok(Self {
      snapshot,
      file,
      cwd,
    })
  }

  pub fn snapshot(&self) -> &Snapshot {
    &self.snapshot
  }

  fn buffer(&self, id: BufferId) -> Option<&BufferSnapshot> {
    let id = if id.is_active_sentinel() {
      self.snapshot.active
    } else {
      id.get()
    };
    self.snapshot.buffers.iter().find(|buffer| buffer.id == id)
  }

  fn render_entry(mark: &MarkSnapshot) -> String {
    let text = escape_line_breaks(&mark.text);
    let line = format!(" {} {:>6} {:>4} {text}", mark.mark, mark.line, mark.col);
    line.trim_end().to_string()
  }
}

/// Shows line breaks as `^J` and `^M`, so each entry stays on one line of the
/// dump.
fn escape_line_breaks(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '\n' => escaped.push_str("^J"),
      '\r' => escaped.push_str("^M"),
      _ => escaped.push(ch),
    }
  }
  escaped
}

impl MarkHost for SnapshotHost {
  fn list_marks(&self, chars: &str) -> host::Result<String> {
    let mut marks = self
      .snapshot
      .marks
      .iter()
      .filter_map(|mark| chars.find(mark.mark).map(|pos| (pos, mark)))
      .collect::<Vec<_>>();
    if marks.is_empty() {
      return Err(HostError::NoMarks(chars.to_string()));
    }
    marks.sort_by_key(|(pos, _)| *pos);

    let mut listing = LISTING_HEADER.to_string();
    for (_, mark) in marks {
      listing.push('\n');
      listing.push_str(&Self::render_entry(mark));
    }
    Ok(listing)
  }

  fn locate(&self, mark: char) -> BufferRef {
    let Some(id) = self
      .snapshot
      .marks
      .iter()
      .find(|m| m.mark == mark)
      .and_then(|m| m.buffer)
    else {
      return BufferRef::active();
    };

    let loaded = self
      .snapshot
      .buffers
      .iter()
      .any(|buffer| buffer.id == id && buffer.loaded);
    BufferRef::new(BufferId::new(id), loaded, id == self.snapshot.active)
  }

  fn read_line(&self, buffer: BufferId, line: usize) -> Option<String> {
    let buffer = self.buffer(buffer).filter(|buffer| buffer.loaded)?;
    buffer.lines.get(line.checked_sub(1)?).cloned()
  }

  fn buffer_name(&self, buffer: BufferId) -> String {
    self
      .buffer(buffer)
      .map(|buffer| buffer.name.clone())
      .unwrap_or_default()
  }

  fn to_absolute(&self, path: &str) -> PathBuf {
    path::absolute(path, &self.cwd)
  }

  fn file_readable(&self, path: &Path) -> bool {
    path::is_readable_file(path)
  }

  fn delete_marks(&mut self, marks: &str) -> host::Result<()> {
    if let Some(bad) = marks.chars().find(|&ch| !is_mark_char(ch)) {
      return Err(HostError::command(
        format!("delmarks {marks}"),
        format!("invalid mark `{bad}`"),
      ));
    }

    let before = self.snapshot.marks.len();
    self
      .snapshot
      .marks
      .retain(|mark| !marks.contains(mark.mark));
    log::info!(
      "deleted {} marks from {}",
      before - self.snapshot.marks.len(),
      self.file.display()
    );
    Ok(())
  }

  fn persist_mark_state(&mut self) -> host::Result<()> {
    let dir = match self.file.parent() {
      Some(dir) if !dir.as_os_str().is_empty() => dir,
      _ => Path::new("."),
    };
    let json = serde_json::to_string_pretty(&self.snapshot)
      .map_err(|err| HostError::command("persist", err.to_string()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp
      .persist(&self.file)
      .map_err(|err| HostError::Io(err.error))?;
    log::debug!("wrote mark state to {}", self.file.display());
    Ok(())
  }

  fn jump_to(&mut self, path: &Path, line: usize, col: usize) -> host::Result<()> {
    let target = self
      .snapshot
      .buffers
      .iter()
      .find(|buffer| path::absolute(&buffer.name, &self.cwd) == path)
      .map(|buffer| buffer.id);
    if let Some(id) = target {
      self.snapshot.active = id;
    }

    self.snapshot.last_jump = Some(JumpRecord {
      path: path.to_path_buf(),
      line,
      col,
    });
    Ok(())
  }
}
