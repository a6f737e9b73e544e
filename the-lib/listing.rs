//! Parsing of the host's textual mark dump.
//!
//! The dump looks like the output of `:marks`:
//!
//! ```text
//!
//! mark line  col file/text
//!  a     10    4 let x = 1;
//!  B      3    0 ~/notes.md
//! ```
//!
//! A fixed number of header lines precede the entries. Each entry holds the
//! symbol, the line, the column and an optional trailing text that may
//! contain spaces.

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::mark::Mark;

/// Number of lines before the first entry in a `:marks` dump.
pub const DEFAULT_HEADER_LINES: usize = 2;

/// What to do with an entry line that does not parse.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedPolicy {
  /// Drop the line and keep going.
  #[default]
  Skip,
  /// Fail the whole listing.
  Abort,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
  #[error("malformed mark listing line {line_number}: {line:?}")]
  Malformed { line_number: usize, line: String },
}

pub type Result<T> = std::result::Result<T, ListingError>;

#[derive(Debug, Clone, Copy)]
pub struct ListingOptions<'a> {
  /// Symbols that may appear in the listing.
  pub chars:        &'a str,
  pub header_lines: usize,
  pub malformed:    MalformedPolicy,
}

/// Parses every entry of `raw`, in listing order.
pub fn parse_listing(raw: &str, options: &ListingOptions<'_>) -> Result<Vec<Mark>> {
  let mut marks = Vec::new();

  for (idx, line) in raw.split('\n').enumerate().skip(options.header_lines) {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
      continue;
    }

    match parse_entry(line, options.chars) {
      Some(mark) => marks.push(mark),
      None => {
        match options.malformed {
          MalformedPolicy::Skip => {
            log::warn!("skipping malformed mark listing line {}: {line:?}", idx + 1);
          },
          MalformedPolicy::Abort => {
            return Err(ListingError::Malformed {
              line_number: idx + 1,
              line:        line.to_string(),
            });
          },
        }
      },
    }
  }

  Ok(marks)
}

/// Parses one entry line, or `None` when it is malformed.
pub fn parse_entry(line: &str, chars: &str) -> Option<Mark> {
  let [name, line_nr, col, text] = split_fields(line);

  let mut name_chars = name?.chars();
  let name = name_chars.next()?;
  if name_chars.next().is_some() || !chars.contains(name) {
    return None;
  }

  let line_nr = line_nr?.parse::<usize>().ok().filter(|&nr| nr > 0)?;
  // The column is shown 1-based, so it must leave room for the shift.
  let col = col?
    .parse::<usize>()
    .ok()
    .filter(|col| col.checked_add(1).is_some())?;

  Some(Mark::new(name, line_nr, col, text.unwrap_or_default()))
}

/// Splits on whitespace runs into at most four fields. The last field keeps
/// the rest of the line verbatim, minus its leading whitespace.
fn split_fields(line: &str) -> [Option<&str>; 4] {
  let mut fields = [None; 4];
  let mut rest = line.trim_start();

  for field in fields.iter_mut().take(3) {
    if rest.is_empty() {
      break;
    }
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    *field = Some(&rest[..end]);
    rest = rest[end..].trim_start();
  }

  if !rest.is_empty() {
    fields[3] = Some(rest);
  }
  fields
}
