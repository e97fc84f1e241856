//! The resolved diagnostic value produced by a fixture run.
//!
//! A [`Diagnostic`] is one reported finding, positioned at a line (and
//! optionally a column) with its message already resolved through the
//! [`MessageCatalog`](crate::messages::MessageCatalog). The
//! [`Diagnostic::formatted`] rendering is the exact string the
//! [comparator](crate::expect::compare) holds against an expected literal.

use std::fmt;

/// The line number reserved for harness-level failures.
///
/// A diagnostic at line 0 is not tied to a source position; the
/// [`FixtureRunner`](crate::runner::FixtureRunner) synthesizes one per
/// unreadable input file.
pub const HARNESS_LINE: u32 = 0;

/// One reported finding with its resolved message text.
///
/// Diagnostics are created by the [`FixtureRunner`](crate::runner::FixtureRunner),
/// either by resolving an engine [`Finding`](crate::engine::Finding) through
/// the catalog or by synthesizing an entry for an unreadable input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line, or [`HARNESS_LINE`] for harness-level failures.
    pub line: u32,
    /// 1-based source column, absent when the finding has no column.
    pub column: Option<u32>,
    /// The catalog key the message was resolved from.
    pub message_key: String,
    /// The positional arguments that were substituted into the template.
    pub message_args: Vec<String>,
    /// The fully resolved, human-readable message text.
    pub resolved_text: String,
}

impl Diagnostic {
    /// Constructs a new [`Diagnostic`].
    pub fn new(
        line: u32,
        column: Option<u32>,
        message_key: impl Into<String>,
        message_args: Vec<String>,
        resolved_text: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            message_key: message_key.into(),
            message_args,
            resolved_text: resolved_text.into(),
        }
    }

    /// Renders the diagnostic in the expected-entry grammar:
    /// `"<line>: <text>"`, or `"<line>:<column>: <text>"` when a column is
    /// present.
    ///
    /// This is the exact string compared against expected literals; it is
    /// never normalized.
    pub fn formatted(&self) -> String {
        match self.column {
            Some(column) => format!("{}:{}: {}", self.line, column, self.resolved_text),
            None => format!("{}: {}", self.line, self.resolved_text),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn formatted_with_column() {
        let d = Diagnostic::new(
            13,
            Some(9),
            "import.avoidStatic",
            vec!["java.io.File.createTempFile".to_owned()],
            "Using a static member import should be avoided - java.io.File.createTempFile.",
        );
        assert_eq!(
            d.formatted(),
            "13:9: Using a static member import should be avoided - java.io.File.createTempFile."
        );
    }

    #[test]
    fn formatted_without_column() {
        let d = Diagnostic::new(27, None, "file.containsTab", vec![], "Line contains a tab character.");
        assert_eq!(d.formatted(), "27: Line contains a tab character.");
    }

    #[test]
    fn harness_line_renders_as_zero() {
        let d = Diagnostic::new(
            HARNESS_LINE,
            None,
            "general.exception",
            vec!["/tmp/missing.java (No such file or directory)".to_owned()],
            "/tmp/missing.java (No such file or directory)",
        );
        assert_eq!(
            d.formatted(),
            "0: /tmp/missing.java (No such file or directory)"
        );
    }

    #[test]
    fn display_matches_formatted() {
        let d = Diagnostic::new(5, Some(1), "k", vec![], "text");
        assert_eq!(format!("{d}"), d.formatted());
    }
}
