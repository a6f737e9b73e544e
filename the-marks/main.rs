mod cli;
mod logging;
mod snapshot;

use std::io::{
  self,
  Write,
};

use anyhow::{
  Context,
  Result,
  bail,
};
use clap::Parser;
use the_marks_lib::{
  action::MarkAction,
  config::{
    self,
    MarksConfig,
  },
  entry::ResolvedMarkEntry,
  highlight::highlight_commands,
  host::MarkHost,
  source::MarkSource,
};

use crate::{
  cli::{
    Args,
    Command,
  },
  snapshot::SnapshotHost,
};

fn main() -> Result<()> {
  let args = Args::parse();

  let log_file = args
    .log_file
    .clone()
    .unwrap_or_else(config::default_log_file);
  logging::setup_logging(args.verbose, &log_file)?;

  let config = match &args.config {
    Some(path) => MarksConfig::load(path),
    None => MarksConfig::load_default(),
  }
  .context("failed to load config")?;

  run(args.command, MarkSource::new(config), &mut io::stdout().lock())
}

fn run(command: Command, source: MarkSource, out: &mut impl Write) -> Result<()> {
  match command {
    Command::List {
      snapshot,
      query,
      json,
    } => {
      let host = SnapshotHost::open(snapshot)?;
      let entries = match query {
        Some(query) => source.gather_filtered(&host, &query)?,
        None => source.gather_candidates(&host)?,
      };

      if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
      } else {
        for entry in &entries {
          writeln!(out, "{}", entry.word)?;
        }
      }
    },
    Command::Delete { snapshot, marks } => {
      let mut host = SnapshotHost::open(snapshot)?;
      let entries = source.gather_candidates(&host)?;
      let targets = select(&entries, marks.chars())?;
      source
        .run_action(MarkAction::Delete, &mut host, &targets)
        .context("failed to delete marks")?;
      writeln!(out, "deleted {marks}")?;
    },
    Command::Open { snapshot, mark } => {
      let mut host = SnapshotHost::open(snapshot)?;
      let entries = source.gather_candidates(&host)?;
      let targets = select(&entries, [mark])?;
      source
        .run_action(MarkAction::Open, &mut host, &targets)
        .context("failed to open mark")?;
      host
        .persist_mark_state()
        .context("failed to save snapshot")?;
      let target = targets[0].target();
      writeln!(
        out,
        "{}:{}:{}",
        target.path.display(),
        target.line,
        target.col
      )?;
    },
    Command::Highlight { syntax } => {
      let commands = match syntax {
        Some(syntax) => highlight_commands(&syntax),
        None => source.highlight_commands(),
      };
      for command in commands {
        writeln!(out, "{command}")?;
      }
    },
  }

  Ok(())
}

/// Entries for `marks`, in the order the marks are given.
fn select(
  entries: &[ResolvedMarkEntry],
  marks: impl IntoIterator<Item = char>,
) -> Result<Vec<ResolvedMarkEntry>> {
  let mut targets = Vec::new();
  for mark in marks {
    let Some(entry) = entries.iter().find(|entry| entry.mark == mark) else {
      bail!("mark `{mark}` is not set");
    };
    targets.push(entry.clone());
  }
  Ok(targets)
}
