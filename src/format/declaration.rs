//! Declaration line reformatting
//!
//! Turns a one-line function signature into one parameter per line:
//!
//! ```text
//! function foo(a, b, c)      function foo(
//!                        =>      a,
//!                                b,
//!                                c
//!                            )
//! ```
//!
//! The rewrite is plain string substitution. Only the first `(` and the first
//! `)` of the line act as anchors, nesting is not tracked.

use std::borrow::Cow;

use crate::config::Config;

/// Rewrites declaration candidates into a multi-line parameter list
#[derive(Debug, Clone)]
pub struct DeclarationFormatter {
    /// Prefix a line must start with to be rewritten
    trigger: String,
    /// Tokens removed from rewritten lines, applied in order
    strip: Vec<String>,
    /// `(` followed by a line break and the indent
    open: String,
    /// `,` followed by a line break and the indent
    separator: String,
    /// What an empty parameter list looks like after the splitting steps
    empty_params: String,
    /// Whether `<!-- docsig: off/on -->` regions are honoured by the pipeline
    directives: bool,
}

impl DeclarationFormatter {
    /// Build a formatter from explicit rules
    #[must_use]
    pub fn new(trigger: impl Into<String>, indent: usize, strip: Vec<String>) -> Self {
        let pad = " ".repeat(indent);
        Self {
            trigger: trigger.into(),
            strip,
            open: format!("(\n{pad}"),
            separator: format!(",\n{pad}"),
            empty_params: format!("(\n{pad}\n)"),
            directives: false,
        }
    }

    /// Enable or disable `<!-- docsig: off/on -->` region handling
    #[must_use]
    pub fn with_directives(mut self, enabled: bool) -> Self {
        self.directives = enabled;
        self
    }

    #[must_use]
    pub fn honors_directives(&self) -> bool {
        self.directives
    }

    /// Build a formatter from the configured trigger, indent and strip tokens
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.trigger.clone(), config.indent, config.strip.clone())
            .with_directives(config.directives)
    }

    /// Whether `line` is a declaration candidate.
    ///
    /// The check is a raw prefix match: leading whitespace prevents a match.
    #[must_use]
    pub fn is_candidate(&self, line: &str) -> bool {
        line.starts_with(&self.trigger)
    }

    /// Reformat a single line.
    ///
    /// Non-candidates are returned borrowed and untouched. The line may carry
    /// its own terminator; it simply ends up after the closing `)`.
    #[must_use]
    pub fn format_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        if !self.is_candidate(line) {
            return Cow::Borrowed(line);
        }

        let mut out = line
            .replacen('(', &self.open, 1)
            .replacen(')', "\n)", 1)
            .replace(", ", &self.separator);
        for token in &self.strip {
            out = out.replace(token.as_str(), "");
        }
        Cow::Owned(out.replace(&self.empty_params, "()"))
    }
}

impl Default for DeclarationFormatter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
