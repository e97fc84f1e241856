/// Harness-fatal error types.
///
/// [`HarnessError`] covers every condition that means the *test setup* is
/// wrong (unknown rule name, missing message key, malformed expectation) or
/// that the engine under test failed internally. None of these variants
/// represent a failed fixture: an expectation mismatch is the normal
/// "test failed" outcome and is carried by
/// [`ComparisonResult`](crate::expect::ComparisonResult), and an unreadable
/// input file is converted into a synthetic diagnostic by the
/// [`FixtureRunner`](crate::runner::FixtureRunner) rather than raised here.
use std::fmt;

// ---------------------------------------------------------------------------
// HarnessError
// ---------------------------------------------------------------------------

/// All harness-fatal error conditions.
///
/// Every variant aborts the run it occurs in: a wrong rule name or a broken
/// message template is a defect in the test definition or the engine, not in
/// the system under test, and masking it would defeat the harness's purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The rule name could not be resolved against the rule registry.
    UnknownRule {
        /// The name that failed to resolve.
        name: String,
    },

    /// A message key was absent from its bundle for every fallback locale
    /// tried (specific locale, language-only locale, root bundle), or the
    /// bundle id itself is unknown to the catalog.
    MessageNotFound {
        /// The bundle that was searched.
        bundle: String,
        /// The key that was not found.
        key: String,
        /// The locale the resolution started from.
        locale: String,
    },

    /// A message template and its argument list disagree: the template
    /// references a positional placeholder with no corresponding argument,
    /// or an argument is never consumed by any placeholder.
    TemplateMismatch {
        /// The bundle the template came from.
        bundle: String,
        /// The key of the offending template.
        key: String,
        /// Description of the disagreement.
        detail: String,
    },

    /// An expected-entry string does not match the
    /// `"<line>[:<column>]: <text>"` grammar.
    MalformedExpectation {
        /// The string that failed to parse.
        text: String,
    },

    /// The rule engine failed during configuration or evaluation.
    ///
    /// A rule that rejects an attribute or fails on readable input is a
    /// defect to surface loudly; this variant is never produced for an
    /// unreadable input file.
    Evaluation {
        /// The name of the rule that failed.
        rule: String,
        /// The engine's own description of the failure.
        detail: String,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRule { name } => {
                write!(f, "unknown rule: no constructor registered for {name:?}")
            }
            Self::MessageNotFound {
                bundle,
                key,
                locale,
            } => {
                write!(
                    f,
                    "message not found: key {key:?} is absent from bundle {bundle:?} \
                     for locale {locale:?} and all of its fallbacks"
                )
            }
            Self::TemplateMismatch {
                bundle,
                key,
                detail,
            } => {
                write!(
                    f,
                    "template mismatch in {bundle:?} key {key:?}: {detail}"
                )
            }
            Self::MalformedExpectation { text } => {
                write!(
                    f,
                    "malformed expectation {text:?}: expected \"<line>[:<column>]: <text>\""
                )
            }
            Self::Evaluation { rule, detail } => {
                write!(f, "rule {rule:?} failed during evaluation: {detail}")
            }
        }
    }
}

impl std::error::Error for HarnessError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
