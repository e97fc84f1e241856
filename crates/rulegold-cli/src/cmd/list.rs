//! Implementation of `rulegold list <manifest>`.
//!
//! Parses a corpus manifest and prints its cases grouped by originating
//! (project, commit), without running anything. Listing is tolerant by
//! design: rule names are not resolved against the registry here, so a
//! manifest for a different rule set can still be inspected.
use std::collections::BTreeMap;
use std::io::Write;

use rulegold_core::{Manifest, ManifestCase};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::FormatMode;

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `list` command.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] — the manifest is not valid JSON.
/// - [`CliError::IoError`] — stdout could not be written.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let mode = match format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(content, mode, &mut out)
}

/// The testable command body.
///
/// # Errors
///
/// See [`run`].
pub fn execute<W: Write>(content: &str, mode: FormatMode, out: &mut W) -> Result<(), CliError> {
    let manifest = Manifest::from_json_str(content).map_err(|e| CliError::ParseFailed {
        source: "manifest".to_owned(),
        detail: format!("line {}, column {}: {e}", e.line(), e.column()),
    })?;

    let write_error = |e: std::io::Error| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    };

    match mode {
        FormatMode::Human => {
            let mut groups: BTreeMap<(&str, &str), Vec<&ManifestCase>> = BTreeMap::new();
            for case in &manifest.cases {
                groups
                    .entry((case.project.as_str(), case.commit.as_str()))
                    .or_default()
                    .push(case);
            }
            for ((project, commit), cases) in groups {
                writeln!(out, "{project}@{commit}").map_err(write_error)?;
                for case in cases {
                    writeln!(
                        out,
                        "  {} ({} input(s), {} expected)",
                        case.rule,
                        case.inputs.len(),
                        case.expected.len()
                    )
                    .map_err(write_error)?;
                }
            }
        }
        FormatMode::Json => {
            for case in &manifest.cases {
                let record = serde_json::json!({
                    "type": "case",
                    "project": case.project,
                    "commit": case.commit,
                    "rule": case.rule,
                    "inputs": case.inputs.len(),
                    "expected": case.expected.len(),
                });
                writeln!(out, "{record}").map_err(write_error)?;
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
