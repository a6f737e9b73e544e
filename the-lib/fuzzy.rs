//! Fuzzy filtering of mark rows, powered by [`nucleo`].
//!
//! The selection framework normally does its own matching. This is for hosts
//! that hand a query over with the listing request and expect a ranked
//! result back. Matching happens synchronously on the current thread, which is
//! fine for at most 62 marks.
//!
//! Smart case is used: lowercase queries match case-insensitively, queries
//! containing uppercase characters match case-sensitively.

use std::cell::RefCell;

use nucleo::{
  Config,
  Matcher,
  pattern::{
    Atom,
    AtomKind,
    CaseMatching,
    Normalization,
  },
};

use crate::entry::ResolvedMarkEntry;

thread_local! {
  static MATCHER: RefCell<Matcher> = RefCell::new(Matcher::new(Config::DEFAULT));
}

/// Entries whose row text matches `query`, best match first.
///
/// A blank query keeps every entry in its original order.
pub fn filter<'a>(entries: &'a [ResolvedMarkEntry], query: &str) -> Vec<&'a ResolvedMarkEntry> {
  if query.trim().is_empty() {
    return entries.iter().collect();
  }

  MATCHER.with(|matcher| filter_with(&mut matcher.borrow_mut(), entries, query))
}

/// Same as [`filter`] with a caller-provided matcher.
pub fn filter_with<'a>(
  matcher: &mut Matcher,
  entries: &'a [ResolvedMarkEntry],
  query: &str,
) -> Vec<&'a ResolvedMarkEntry> {
  matcher.config = Config::DEFAULT;

  let pattern = Atom::new(
    query.trim(),
    CaseMatching::Smart,
    Normalization::Smart,
    AtomKind::Fuzzy,
    false,
  );
  let words = entries.iter().map(|entry| entry.word.as_str());
  let scores = pattern.match_list(words.enumerate().map(Indexed), matcher);

  scores
    .into_iter()
    .map(|(Indexed((idx, _)), _)| &entries[idx])
    .collect()
}

/// Keeps the entry index alongside the text being matched.
struct Indexed<'a>((usize, &'a str));

impl AsRef<str> for Indexed<'_> {
  fn as_ref(&self) -> &str {
    (self.0).1
  }
}
