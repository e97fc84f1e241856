/// The seam between the harness and the rule-evaluation engine.
///
/// This module defines [`Check`], [`Finding`], [`SourceText`], and
/// [`EvalError`]: the complete interface the harness requires of the engine
/// under test. The harness treats everything behind this seam as a black
/// box; it neither parses source nor implements production detection logic.
///
/// Engine guarantee relied upon (but not enforced) by the harness: within a
/// single input, [`Check::check`] returns findings in ascending line order,
/// then ascending column within a line.
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// SourceText
// ---------------------------------------------------------------------------

/// A readable input handed to a check.
///
/// Source parsing is out of scope for the harness, so the "parsed input" is
/// the raw text plus its origin path. Checks that need line-oriented access
/// use [`SourceText::lines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    path: PathBuf,
    text: String,
}

impl SourceText {
    /// Wraps the contents read from `path`.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// The path the text was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full text of the input.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterates over `(line_number, line)` pairs, 1-based, in file order.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &str)> {
        self.text
            .lines()
            .enumerate()
            .map(|(i, line)| (u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1), line))
    }
}

// ---------------------------------------------------------------------------
// Finding
// ---------------------------------------------------------------------------

/// One raw finding emitted by a check, before message resolution.
///
/// The [`FixtureRunner`](crate::runner::FixtureRunner) turns findings into
/// [`Diagnostic`](crate::diagnostic::Diagnostic) values by resolving
/// `message_key` and `message_args` through the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column, absent for line-only findings.
    pub column: Option<u32>,
    /// Key into the check's message bundle.
    pub message_key: String,
    /// Positional template arguments, in substitution order.
    pub message_args: Vec<String>,
}

impl Finding {
    /// Constructs a finding with a column position.
    pub fn at(line: u32, column: u32, message_key: impl Into<String>, message_args: Vec<String>) -> Self {
        Self {
            line,
            column: Some(column),
            message_key: message_key.into(),
            message_args,
        }
    }

    /// Constructs a line-only finding.
    pub fn on_line(line: u32, message_key: impl Into<String>, message_args: Vec<String>) -> Self {
        Self {
            line,
            column: None,
            message_key: message_key.into(),
            message_args,
        }
    }
}

// ---------------------------------------------------------------------------
// EvalError
// ---------------------------------------------------------------------------

/// Engine-side failure during configuration or evaluation.
///
/// Attribute problems surface here, at evaluation time, because attribute
/// validation is delegated to the consuming rule: a configuration carrying a
/// bad attribute builds fine and fails only when the rule is asked to apply
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The rule does not recognize an attribute name.
    UnknownAttribute {
        /// The rule that rejected the attribute.
        rule: String,
        /// The unrecognized attribute name.
        name: String,
    },

    /// The rule recognizes the attribute but rejects its value.
    InvalidAttribute {
        /// The rule that rejected the value.
        rule: String,
        /// The attribute name.
        name: String,
        /// Why the value was rejected.
        detail: String,
    },

    /// The rule failed while checking a readable input.
    Internal {
        /// The rule that failed.
        rule: String,
        /// The rule's own description of the failure.
        detail: String,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAttribute { rule, name } => {
                write!(f, "rule {rule:?} does not recognize attribute {name:?}")
            }
            Self::InvalidAttribute { rule, name, detail } => {
                write!(f, "rule {rule:?} rejected attribute {name:?}: {detail}")
            }
            Self::Internal { rule, detail } => {
                write!(f, "rule {rule:?} failed: {detail}")
            }
        }
    }
}

impl std::error::Error for EvalError {}

// ---------------------------------------------------------------------------
// Check
// ---------------------------------------------------------------------------

/// A single configurable detector run against source input.
///
/// The registry stores constructors for `Box<dyn Check>`; a fresh instance is
/// created per fixture case, configured once, and then asked to check each
/// readable input in order.
///
/// # Object safety
///
/// The trait is object-safe; the harness only ever holds `Box<dyn Check>`.
///
/// # Attribute discipline
///
/// [`Check::configure`] receives the full attribute map from the
/// [`RuleConfig`](crate::config::RuleConfig). An attribute the rule does not
/// recognize must be rejected with [`EvalError::UnknownAttribute`] (the
/// default implementation rejects every attribute); values must never be
/// silently coerced.
pub trait Check {
    /// The registry name of this check.
    fn name(&self) -> &'static str;

    /// The message bundle this check's findings resolve against.
    fn bundle(&self) -> &'static str;

    /// Applies the configuration's attributes.
    ///
    /// Called exactly once, before any [`check`][Check::check] call. The
    /// default implementation accepts an empty map and rejects any attribute
    /// with [`EvalError::UnknownAttribute`].
    ///
    /// # Errors
    ///
    /// [`EvalError::UnknownAttribute`] or [`EvalError::InvalidAttribute`]
    /// when the map carries something this check cannot consume.
    fn configure(&mut self, attributes: &BTreeMap<String, String>) -> Result<(), EvalError> {
        match attributes.keys().next() {
            None => Ok(()),
            Some(name) => Err(EvalError::UnknownAttribute {
                rule: self.name().to_owned(),
                name: name.clone(),
            }),
        }
    }

    /// Checks one readable input and returns findings in emission order
    /// (ascending line, then ascending column).
    ///
    /// # Errors
    ///
    /// [`EvalError::Internal`] when the check itself fails; such errors
    /// propagate out of the harness uncaught by design.
    fn check(&self, input: &SourceText) -> Result<Vec<Finding>, EvalError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
