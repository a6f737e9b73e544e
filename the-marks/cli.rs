use std::path::PathBuf;

use clap::{
  ArgAction,
  Parser,
  Subcommand,
};

#[derive(Debug, Parser)]
#[command(
  name = "the-marks",
  version,
  about = "List, open and delete editor marks from a session snapshot"
)]
pub struct Args {
  /// Increase logging verbosity (repeat for more).
  #[arg(short, long, action = ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Config file to use instead of the default one.
  #[arg(long, value_name = "FILE", global = true)]
  pub config: Option<PathBuf>,

  /// Log file to write to instead of the default one.
  #[arg(long, value_name = "FILE", global = true)]
  pub log_file: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Print one row per mark.
  List {
    /// Session snapshot (JSON).
    snapshot: PathBuf,
    /// Only show rows fuzzy-matching this query.
    #[arg(short, long)]
    query:    Option<String>,
    /// Print the resolved entries as JSON.
    #[arg(long)]
    json:     bool,
  },
  /// Delete marks and write the snapshot back.
  Delete {
    snapshot: PathBuf,
    /// Mark symbols, e.g. `abC`.
    marks:    String,
  },
  /// Jump to a mark and write the snapshot back.
  Open { snapshot: PathBuf, mark: char },
  /// Print the host commands that register the source's highlighting.
  Highlight {
    /// Syntax group name, overrides the configured one.
    #[arg(long)]
    syntax: Option<String>,
  },
}
