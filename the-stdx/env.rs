//! Functions for working with the host environment.

use std::path::PathBuf;

use eyre::{
  Result,
  WrapErr,
};
use parking_lot::RwLock;

// Kept as a static so that hosts without an explicit cwd resolve relative
// mark paths the same way on every call.
static CWD: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Get the current working directory.
/// This information is managed internally as the call to std::env::current_dir
/// might fail if the cwd has been deleted.
pub fn current_working_dir() -> Result<PathBuf> {
  if let Some(path) = &*CWD.read() {
    return Ok(path.clone());
  }

  // implementation of crossplatform pwd -L
  // we want pwd -L so that symlinked directories are handled correctly
  let mut cwd = std::env::current_dir().wrap_err("failed to get current working directory")?;

  let pwd = std::env::var_os("PWD");
  #[cfg(windows)]
  let pwd = pwd.or_else(|| std::env::var_os("CD"));

  if let Some(pwd) = pwd.map(PathBuf::from)
    && pwd.canonicalize().ok().as_ref() == Some(&cwd)
  {
    cwd = pwd;
  }

  let mut dst = CWD.write();
  *dst = Some(cwd.clone());

  Ok(cwd)
}

/// The user's home directory, if it can be determined.
pub fn home_dir() -> Option<PathBuf> {
  etcetera::home_dir().ok()
}
