//! Lexical path helpers.
//!
//! Mark paths come from the host as raw strings: buffer names relative to the
//! editor's cwd, `~/`-prefixed paths from the mark state file, or absolute
//! paths. Everything here works on the path text alone except
//! [`is_readable_file`], which touches the filesystem.

use std::{
  borrow::Cow,
  fs::File,
  path::{
    Component,
    Path,
    PathBuf,
  },
};

use crate::env::home_dir;

/// Replaces a leading `~` component with the user's home directory.
///
/// `~user` forms are left untouched.
pub fn expand_tilde<'a, P>(path: P) -> Cow<'a, Path>
where
  P: Into<Cow<'a, Path>>,
{
  let path = path.into();
  let mut components = path.components();
  if let Some(Component::Normal(c)) = components.next()
    && c == "~"
    && let Some(mut home) = home_dir()
  {
    home.push(components.as_path());
    return Cow::Owned(home);
  }

  path
}

/// Normalize a path without resolving symlinks.
///
/// `.` components are dropped and `..` pops the previous component. A `..`
/// at the root stays at the root.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
  let mut ret = PathBuf::new();
  for component in path.as_ref().components() {
    match component {
      Component::Prefix(prefix) => ret.push(prefix.as_os_str()),
      Component::RootDir => ret.push(component.as_os_str()),
      Component::CurDir => {},
      Component::ParentDir => {
        ret.pop();
      },
      Component::Normal(c) => ret.push(c),
    }
  }
  ret
}

/// Full path of `path` relative to `cwd`, the way an editor expands a file
/// name to its `:p` form: `~` is expanded, relative paths are joined onto
/// `cwd` and the result is normalized.
///
/// An empty path resolves to `cwd` itself.
pub fn absolute(path: impl AsRef<Path>, cwd: &Path) -> PathBuf {
  let path = expand_tilde(path.as_ref());
  if path.is_absolute() {
    normalize(path)
  } else {
    normalize(cwd.join(path))
  }
}

/// Whether `path` names an existing regular file that can be opened for
/// reading.
pub fn is_readable_file(path: &Path) -> bool {
  path.is_file() && File::open(path).is_ok()
}

#[cfg(test)]
mod tests {
  use std::path::{
    Path,
    PathBuf,
  };

  use super::*;

  #[test]
  fn normalize_drops_dots() {
    assert_eq!(normalize("/a/./b/../c"), PathBuf::from("/a/c"));
    assert_eq!(normalize("/../a"), PathBuf::from("/a"));
    assert_eq!(normalize("a/b/.."), PathBuf::from("a"));
  }

  #[cfg(unix)]
  #[test]
  fn absolute_joins_relative_paths() {
    let cwd = Path::new("/home/me/project");
    assert_eq!(
      absolute("src/main.rs", cwd),
      PathBuf::from("/home/me/project/src/main.rs")
    );
    assert_eq!(
      absolute("../other/lib.rs", cwd),
      PathBuf::from("/home/me/other/lib.rs")
    );
    assert_eq!(absolute("/tmp/x.txt", cwd), PathBuf::from("/tmp/x.txt"));
    assert_eq!(absolute("", cwd), PathBuf::from("/home/me/project"));
  }

  #[test]
  fn absolute_expands_tilde() {
    let Some(home) = home_dir() else {
      return;
    };
    assert_eq!(
      absolute("~/notes.md", Path::new("/somewhere")),
      normalize(home.join("notes.md"))
    );
  }

  #[test]
  fn tilde_user_is_left_alone() {
    let path = expand_tilde(Path::new("~other/file"));
    assert_eq!(path, Path::new("~other/file"));
  }

  #[test]
  fn readable_file_checks() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("present.txt");
    std::fs::write(&file, "x").unwrap();

    assert!(is_readable_file(&file));
    assert!(!is_readable_file(&dir.path().join("missing.txt")));
    assert!(!is_readable_file(dir.path()));
  }
}
