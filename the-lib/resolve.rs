//! Mark resolution.
//!
//! Each mark is classified against the host's buffers, in this order:
//!
//! 1. the active buffer (host reports the sentinel buffer `0`),
//! 2. a loaded buffer, where the live line is shown with its buffer name, or
//!    the captured text flagged as `-[...]-` when the line no longer exists,
//! 3. an unloaded buffer whose recorded file is readable on disk,
//! 4. anything else, flagged as `-[...]-`.
//!
//! The first matching case wins. For unloaded buffers the captured text is the
//! file path the host recorded for the mark.

use crate::{
  entry::{
    MarkState,
    ResolvedMarkEntry,
    flagged_preview,
    format_word,
  },
  host::MarkHost,
  mark::{
    BufferId,
    Mark,
  },
};

/// Resolves `marks` against the live host state, preserving order.
pub fn resolve<H>(marks: &[Mark], host: &H) -> Vec<ResolvedMarkEntry>
where
  H: MarkHost + ?Sized,
{
  marks.iter().map(|mark| resolve_mark(mark, host)).collect()
}

pub fn resolve_mark<H>(mark: &Mark, host: &H) -> ResolvedMarkEntry
where
  H: MarkHost + ?Sized,
{
  let buffer = host.locate(mark.name);

  let (state, preview, path) = if buffer.id.is_active_sentinel() {
    let text = host
      .read_line(BufferId::ACTIVE, mark.line)
      .unwrap_or_default();
    (MarkState::Current, text, host.buffer_name(BufferId::ACTIVE))
  } else if buffer.loaded {
    let path = host.buffer_name(buffer.id);
    match host.read_line(buffer.id, mark.line) {
      Some(text) => {
        let preview = format!("{text}:[{path}]");
        (MarkState::Loaded { line_valid: true }, preview, path)
      },
      None => {
        log::debug!(
          "mark {} points past the end of buffer {}",
          mark.name,
          buffer.id
        );
        (
          MarkState::Loaded { line_valid: false },
          flagged_preview(&mark.text),
          path,
        )
      },
    }
  } else if host.file_readable(&host.to_absolute(&mark.text)) {
    (MarkState::OnDisk, mark.text.clone(), mark.text.clone())
  } else {
    (
      MarkState::Invalid,
      flagged_preview(&mark.text),
      mark.text.clone(),
    )
  };

  let col = mark.display_col();
  ResolvedMarkEntry {
    mark: mark.name,
    word: format_word(mark.name, buffer.current, mark.line, col, &preview),
    target_path: host.to_absolute(&path),
    preview,
    path,
    line: mark.line,
    col,
    is_current: buffer.current,
    state,
  }
}
