//! Inline directive parsing for `<!-- docsig: ... -->` comments
//!
//! When enabled (`directives = true` or `--directives`), a markdown file can
//! fence off regions that must not be reflowed:
//!
//! ```markdown
//! <!-- docsig: off -->
//! function keep(this, as, is)
//! <!-- docsig: on -->
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Pattern to match docsig directives
static DOCSIG_DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*<!--\s*docsig:\s*([a-z-]+)\s*-->\s*$").unwrap()
});

/// A recognised directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Stop reformatting until the next `on`
    Off,
    /// Resume reformatting
    On,
}

/// Parse a directive line
///
/// # Returns
/// * `Some(Directive)` if the line is a known directive
/// * `None` if the line is not a directive, or names an unknown one
#[must_use]
pub fn parse_directive(line: &str) -> Option<Directive> {
    let caps = DOCSIG_DIRECTIVE_RE.captures(line)?;
    let value = caps.get(1)?.as_str();
    match value.to_ascii_lowercase().as_str() {
        "off" => Some(Directive::Off),
        "on" => Some(Directive::On),
        other => {
            log::debug!("Ignoring unknown docsig directive '{other}'");
            None
        }
    }
}

/// Tracks whether reformatting is currently switched off
#[derive(Debug, Default)]
pub struct DirectiveState {
    disabled: bool,
}

impl DirectiveState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line; returns true if the line may be reformatted
    ///
    /// Directive lines themselves are never reformatted.
    pub fn observe(&mut self, line: &str) -> bool {
        match parse_directive(line) {
            Some(Directive::Off) => {
                self.disabled = true;
                false
            }
            Some(Directive::On) => {
                self.disabled = false;
                false
            }
            None => !self.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_off_on() {
        assert_eq!(parse_directive("<!-- docsig: off -->"), Some(Directive::Off));
        assert_eq!(parse_directive("<!-- docsig: on -->\n"), Some(Directive::On));
    }

    #[test]
    fn test_parse_case_and_spacing() {
        assert_eq!(
            parse_directive("  <!--DOCSIG:OFF-->  \r\n"),
            Some(Directive::Off)
        );
        assert_eq!(parse_directive("<!-- docsig: enable -->"), None);
        assert_eq!(parse_directive("<!-- docsig: disable -->"), None);
    }

    #[test]
    fn test_not_a_directive() {
        assert_eq!(parse_directive("<!-- some other comment -->"), None);
        assert_eq!(parse_directive("text <!-- docsig: off -->"), None);
        assert_eq!(parse_directive("<!-- docsig: sideways -->"), None);
    }

    #[test]
    fn test_state_region() {
        let mut state = DirectiveState::new();
        assert!(state.observe("function a(x, y)"));
        assert!(!state.observe("<!-- docsig: off -->"));
        assert!(!state.observe("function b(x, y)"));
        assert!(!state.observe("<!-- docsig: on -->"));
        assert!(state.observe("function c(x, y)"));
    }
}
