//! The `marks` source: gathers candidates from the host and runs actions on
//! the ones the user picked.

use crate::{
  action::{
    self,
    ActionOutcome,
    MarkAction,
  },
  config::MarksConfig,
  entry::ResolvedMarkEntry,
  fuzzy,
  highlight::highlight_commands,
  host::{
    self,
    MarkHost,
  },
  listing::{
    self,
    ListingError,
  },
  mark::Mark,
  resolve::resolve,
};

pub struct MarkSource {
  config: MarksConfig,
}

impl Default for MarkSource {
  fn default() -> Self {
    Self::new(MarksConfig::default())
  }
}

impl MarkSource {
  pub const NAME: &'static str = "marks";
  pub const KIND: &'static str = "file";

  pub fn new(config: MarksConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &MarksConfig {
    &self.config
  }

  /// Marks currently known to the host.
  ///
  /// A failing listing command means the host has no marks to report, so it
  /// yields an empty list. Malformed lines are handled per
  /// [`MarksConfig::malformed`].
  pub fn marks<H>(&self, host: &H) -> Result<Vec<Mark>, ListingError>
  where
    H: MarkHost + ?Sized,
  {
    let raw = match host.list_marks(&self.config.mark_chars) {
      Ok(raw) => raw,
      Err(err) => {
        log::debug!("mark listing unavailable: {err}");
        return Ok(Vec::new());
      },
    };

    listing::parse_listing(&raw, &self.config.listing_options())
  }

  /// Resolved rows for every mark, in listing order.
  pub fn gather_candidates<H>(&self, host: &H) -> Result<Vec<ResolvedMarkEntry>, ListingError>
  where
    H: MarkHost + ?Sized,
  {
    let marks = self.marks(host)?;
    let entries = resolve(&marks, host);
    log::debug!("gathered {} marks", entries.len());
    Ok(entries)
  }

  /// Candidates narrowed down to `query`, best match first.
  pub fn gather_filtered<H>(
    &self,
    host: &H,
    query: &str,
  ) -> Result<Vec<ResolvedMarkEntry>, ListingError>
  where
    H: MarkHost + ?Sized,
  {
    let entries = self.gather_candidates(host)?;
    Ok(
      fuzzy::filter(&entries, query)
        .into_iter()
        .cloned()
        .collect(),
    )
  }

  /// Host commands to run once when the source is registered.
  pub fn highlight_commands(&self) -> Vec<String> {
    highlight_commands(&self.config.syntax_name)
  }

  pub fn run_action<H>(
    &self,
    action: MarkAction,
    host: &mut H,
    targets: &[ResolvedMarkEntry],
  ) -> host::Result<ActionOutcome>
  where
    H: MarkHost + ?Sized,
  {
    log::debug!("running `{action}` on {} marks", targets.len());
    action::run(action, host, targets)
  }
}
