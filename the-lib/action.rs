//! Actions available on selected mark entries.

use std::fmt;

use crate::{
  entry::ResolvedMarkEntry,
  host::{
    MarkHost,
    Result,
  },
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkAction {
  /// Jump to the mark's position.
  #[default]
  Open,
  /// Remove the marks from the host.
  Delete,
}

impl MarkAction {
  pub const fn name(self) -> &'static str {
    match self {
      Self::Open => "open",
      Self::Delete => "delete",
    }
  }

  /// The selection list stays open after the action runs.
  pub const fn persists(self) -> bool {
    matches!(self, Self::Delete)
  }

  /// Candidates are gathered again after the action runs.
  pub const fn redraws(self) -> bool {
    matches!(self, Self::Delete)
  }

  pub const fn outcome(self) -> ActionOutcome {
    ActionOutcome {
      persist: self.persists(),
      redraw:  self.redraws(),
    }
  }
}

impl fmt::Display for MarkAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// What the selection list should do once an action has run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
  pub persist: bool,
  pub redraw:  bool,
}

/// Runs `action` on the selected entries.
pub fn run<H>(action: MarkAction, host: &mut H, targets: &[ResolvedMarkEntry]) -> Result<ActionOutcome>
where
  H: MarkHost + ?Sized,
{
  match action {
    MarkAction::Open => open(host, targets)?,
    MarkAction::Delete => delete(host, targets)?,
  }
  Ok(action.outcome())
}

/// Jumps to every selected entry in turn. The host ends up on the last one.
pub fn open<H>(host: &mut H, targets: &[ResolvedMarkEntry]) -> Result<()>
where
  H: MarkHost + ?Sized,
{
  for entry in targets {
    let target = entry.target();
    host.jump_to(target.path, target.line, target.col)?;
  }
  Ok(())
}

/// Deletes the selected marks with a single host command and persists the
/// host's mark state.
///
/// Symbols are passed in selection order. Host errors are returned as is;
/// nothing is retried.
pub fn delete<H>(host: &mut H, targets: &[ResolvedMarkEntry]) -> Result<()>
where
  H: MarkHost + ?Sized,
{
  if targets.is_empty() {
    return Ok(());
  }

  let marks = targets.iter().map(|entry| entry.mark).collect::<String>();
  log::debug!("deleting marks {marks}");
  host.delete_marks(&marks)?;
  host.persist_mark_state()
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;
  use crate::{
    host::HostError,
    mark::Mark,
    resolve::resolve,
    test_host::{
      Call,
      TestHost,
    },
  };

  fn entries(host: &TestHost, names: &[char]) -> Vec<ResolvedMarkEntry> {
    let marks = names
      .iter()
      .enumerate()
      .map(|(i, &name)| Mark::new(name, i + 1, 0, ""))
      .collect::<Vec<_>>();
    resolve(&marks, host)
  }

  #[test]
  fn delete_issues_one_command_then_persists() {
    let mut host = TestHost::new(1, "a.txt", &["one", "two", "three"]);
    let targets = entries(&host, &['a', 'c']);

    delete(&mut host, &targets).unwrap();

    assert_eq!(host.calls(), vec![
      Call::DeleteMarks("ac".into()),
      Call::Persist
    ]);
  }

  #[test]
  fn delete_keeps_selection_order() {
    let mut host = TestHost::new(1, "a.txt", &["one", "two", "three"]);
    let targets = entries(&host, &['c', 'A', '1']);

    delete(&mut host, &targets).unwrap();

    assert_eq!(host.calls()[0], Call::DeleteMarks("cA1".into()));
  }

  #[test]
  fn delete_without_targets_does_nothing() {
    let mut host = TestHost::new(1, "a.txt", &[]);
    delete(&mut host, &[]).unwrap();
    assert!(host.calls().is_empty());
  }

  #[test]
  fn failed_delete_is_propagated_without_persisting() {
    let mut host = TestHost::new(1, "a.txt", &["one"]);
    host.fail_delete = true;
    let targets = entries(&host, &['a']);

    let err = delete(&mut host, &targets).unwrap_err();

    assert!(matches!(err, HostError::Command { .. }));
    assert_eq!(host.calls(), vec![Call::DeleteMarks("a".into())]);
  }

  #[test]
  fn open_jumps_to_targets() {
    let mut host = TestHost::new(1, "src/a.txt", &["one", "two"]);
    let targets = entries(&host, &['a', 'b']);

    let outcome = run(MarkAction::Open, &mut host, &targets).unwrap();

    assert_eq!(outcome, ActionOutcome::default());
    assert_eq!(host.calls(), vec![
      Call::JumpTo(PathBuf::from("/work/src/a.txt"), 1, 1),
      Call::JumpTo(PathBuf::from("/work/src/a.txt"), 2, 1),
    ]);
  }

  #[test]
  fn delete_persists_and_redraws() {
    let mut host = TestHost::new(1, "a.txt", &["one"]);
    let targets = entries(&host, &['a']);

    let outcome = run(MarkAction::Delete, &mut host, &targets).unwrap();

    assert_eq!(outcome, ActionOutcome {
      persist: true,
      redraw:  true,
    });
  }

  #[test]
  fn open_is_the_default_action() {
    assert_eq!(MarkAction::default(), MarkAction::Open);
    assert_eq!(MarkAction::Open.to_string(), "open");
    assert_eq!(MarkAction::Delete.to_string(), "delete");
  }
}
