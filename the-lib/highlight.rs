//! Syntax rules handed to the host once, when the source is registered.

/// A syntax match linked to an existing highlight group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRule {
  pub name:    &'static str,
  /// Highlight group the match links to.
  pub link:    &'static str,
  /// Pattern in the host's regex dialect.
  pub pattern: &'static str,
}

/// Flags the `-[...]-` preview of marks whose text could not be read live.
pub const INVALID_MARK: HighlightRule = HighlightRule {
  name:    "InvalidMark",
  link:    "Error",
  pattern: r"-\[.\{-}\]-",
};

pub const RULES: &[HighlightRule] = &[INVALID_MARK];

impl HighlightRule {
  pub fn commands(&self, syntax_name: &str) -> [String; 2] {
    [
      format!(
        "syntax match {syntax_name}_{} /{}/ contained containedin={syntax_name}",
        self.name, self.pattern
      ),
      format!(
        "highlight default link {syntax_name}_{} {}",
        self.name, self.link
      ),
    ]
  }
}

/// Host commands registering every rule under `syntax_name`.
pub fn highlight_commands(syntax_name: &str) -> Vec<String> {
  RULES
    .iter()
    .flat_map(|rule| rule.commands(syntax_name))
    .collect()
}

/// Whether `text` contains a `-[...]-` span, the same span [`INVALID_MARK`]
/// matches.
pub fn is_invalid_preview(text: &str) -> bool {
  text
    .match_indices("-[")
    .any(|(start, _)| text[start + 2..].contains("]-"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_host_commands() {
    assert_eq!(highlight_commands("deniteSource_marks"), vec![
      r"syntax match deniteSource_marks_InvalidMark /-\[.\{-}\]-/ contained containedin=deniteSource_marks".to_string(),
      "highlight default link deniteSource_marks_InvalidMark Error".to_string(),
    ]);
  }

  #[test]
  fn detects_flagged_previews() {
    assert!(is_invalid_preview("-[/tmp/gone.txt]-"));
    assert!(is_invalid_preview("b     1:1    -[]-"));
    assert!(!is_invalid_preview("let v = a[-1];"));
    assert!(!is_invalid_preview("hello:[src/lib.rs]"));
    assert!(!is_invalid_preview("x ]- -[ y"));
  }
}
