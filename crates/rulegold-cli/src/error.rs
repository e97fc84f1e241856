/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `rulegold` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: the manifest or catalog could not be
///   read or parsed, or the test setup itself is broken (unknown rule,
///   malformed expectation, missing message key). These terminate before or
///   during the run.
/// - Exit code **1** — logical failure: the run completed and one or more
///   fixtures did not match their expected output.
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `rulegold` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only; `None` for
        /// stdin where the exact size is unknown).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The manifest or catalog is not valid JSON of the expected shape.
    ParseFailed {
        /// A human-readable label for the source.
        source: String,
        /// Parser detail, including line and column.
        detail: String,
    },

    /// The `--locale` argument is not a valid locale tag.
    InvalidLocale {
        /// The rejected value.
        got: String,
    },

    /// The harness reported a fatal setup or engine error: unknown rule,
    /// malformed expectation, unresolvable message, or an engine defect.
    Harness {
        /// The harness error text.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// One or more fixture cases did not match their expected output.
    ///
    /// The per-case reports have already been printed; this variant exists
    /// so `main` can exit with code 1 cleanly.
    FixturesFailed {
        /// The number of failed cases.
        failed: usize,
        /// The total number of cases run.
        total: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input or setup failure (unreadable manifest, unknown rule, etc.).
    /// - `1` — logical failure (fixture mismatches).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidLocale { .. }
            | Self::Harness { .. } => 2,

            Self::FixturesFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseFailed { source, detail } => {
                format!("error: failed to parse {source}: {detail}")
            }
            Self::InvalidLocale { got } => {
                format!("error: invalid locale {got:?}: expected \"language[-REGION]\"")
            }
            Self::Harness { detail } => {
                format!("error: {detail}")
            }
            Self::FixturesFailed { failed, total } => {
                format!("error: {failed} of {total} fixture case(s) failed")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::path::PathBuf;

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn input_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("corpus.json"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/corpus.json"),
            },
            CliError::FileTooLarge {
                source: "corpus.json".to_owned(),
                limit: 1024,
                actual: Some(2048),
            },
            CliError::InvalidUtf8 {
                source: "corpus.json".to_owned(),
                byte_offset: 42,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::IoError {
                source: "corpus.json".to_owned(),
                detail: "device full".to_owned(),
            },
            CliError::ParseFailed {
                source: "corpus.json".to_owned(),
                detail: "line 3, column 9: expected value".to_owned(),
            },
            CliError::InvalidLocale {
                got: "EN_us".to_owned(),
            },
            CliError::Harness {
                detail: "unknown rule: \"typo\"".to_owned(),
            },
        ];
        for e in errors {
            assert_eq!(e.exit_code(), 2, "variant: {e:?}");
        }
    }

    #[test]
    fn fixtures_failed_is_exit_1() {
        let e = CliError::FixturesFailed {
            failed: 3,
            total: 10,
        };
        assert_eq!(e.exit_code(), 1);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("fixtures/corpus.json"),
        };
        let msg = e.message();
        assert!(msg.contains("fixtures/corpus.json"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn parse_failed_message_contains_detail() {
        let e = CliError::ParseFailed {
            source: "corpus.json".to_owned(),
            detail: "line 3, column 9: trailing comma".to_owned(),
        };
        let msg = e.message();
        assert!(msg.contains("line 3, column 9"), "message: {msg}");
        assert!(msg.contains("corpus.json"), "message: {msg}");
    }

    #[test]
    fn invalid_locale_message_quotes_the_value() {
        let e = CliError::InvalidLocale {
            got: "EN_us".to_owned(),
        };
        assert!(e.message().contains("EN_us"));
    }

    #[test]
    fn fixtures_failed_message_counts_cases() {
        let e = CliError::FixturesFailed {
            failed: 2,
            total: 7,
        };
        let msg = e.message();
        assert!(msg.contains('2'), "message: {msg}");
        assert!(msg.contains('7'), "message: {msg}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::Harness {
            detail: "x".to_owned(),
        };
        assert_eq!(format!("{e}"), e.message());
    }

    #[test]
    fn error_trait_is_implemented() {
        let e: Box<dyn std::error::Error> = Box::new(CliError::FixturesFailed {
            failed: 1,
            total: 1,
        });
        assert!(!e.to_string().is_empty());
    }
}
