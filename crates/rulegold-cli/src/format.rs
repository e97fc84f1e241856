/// Case-report formatting: human-readable and JSON (NDJSON) modes.
///
/// This module implements two output strategies for
/// [`rulegold_core::CaseOutcome`] values:
///
/// - **Human mode** (default): one line per case, color-coded by verdict,
///   with mismatches indented beneath failing cases. Colors are disabled
///   when `--no-color` is set, the `NO_COLOR` environment variable is
///   present (per <https://no-color.org>), or stdout is not a TTY.
/// - **JSON mode**: each case is serialized as a single-line JSON object
///   (NDJSON), followed by a summary object.
///
/// Both modes support a **quiet** flag that suppresses per-case lines for
/// passing cases; the summary line is always written.
use std::io::{IsTerminal as _, Write};

use rulegold_core::CaseOutcome;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Returns `true` if ANSI color codes should be emitted to stdout.
///
/// Colors are disabled when any of the following conditions hold:
/// - `no_color_flag` is `true` (the `--no-color` CLI flag was passed).
/// - The `NO_COLOR` environment variable is present (any value).
/// - stdout is not a TTY (e.g. the output is piped to a file).
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

// ---------------------------------------------------------------------------
// Formatter configuration
// ---------------------------------------------------------------------------

/// Output mode selected by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// One optionally colored line per case.
    Human,
    /// One NDJSON object per case.
    Json,
}

/// Resolved formatting flags.
#[derive(Debug, Clone, Copy)]
pub struct FormatterConfig {
    /// Emit ANSI color codes.
    pub colors: bool,
    /// Suppress per-case lines for passing cases.
    pub quiet: bool,
}

impl FormatterConfig {
    /// Builds the configuration from the CLI flags.
    pub fn from_flags(no_color: bool, quiet: bool) -> Self {
        Self {
            colors: colors_enabled(no_color),
            quiet,
        }
    }
}

// ---------------------------------------------------------------------------
// Case reports
// ---------------------------------------------------------------------------

/// Writes one case report to `out`.
///
/// # Errors
///
/// Propagates any write error on `out`.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &CaseOutcome,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet && outcome.passed() {
        return Ok(());
    }
    match mode {
        FormatMode::Human => write_outcome_human(out, outcome, config),
        FormatMode::Json => write_outcome_json(out, outcome),
    }
}

fn write_outcome_human<W: Write>(
    out: &mut W,
    outcome: &CaseOutcome,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let (verdict, color) = if outcome.passed() {
        ("ok  ", GREEN)
    } else {
        ("FAIL", RED)
    };

    if config.colors {
        write!(out, "{color}{verdict}{RESET}")?;
    } else {
        write!(out, "{verdict}")?;
    }
    write!(out, " {} [{}]", outcome.id(), outcome.rule_name())?;

    if outcome.passed() {
        return writeln!(out);
    }

    writeln!(
        out,
        " ({} mismatch(es))",
        outcome.comparison().mismatches().len()
    )?;
    let inputs: Vec<String> = outcome
        .inputs()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    writeln!(out, "    inputs: {}", inputs.join(", "))?;
    for mismatch in outcome.comparison().mismatches() {
        writeln!(out, "    {mismatch}")?;
    }
    Ok(())
}

fn write_outcome_json<W: Write>(out: &mut W, outcome: &CaseOutcome) -> std::io::Result<()> {
    let mismatches: Vec<serde_json::Value> = outcome
        .comparison()
        .mismatches()
        .iter()
        .map(|m| {
            serde_json::json!({
                "index": m.index,
                "expected": m.expected,
                "actual": m.actual,
            })
        })
        .collect();
    let inputs: Vec<String> = outcome
        .inputs()
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    let record = serde_json::json!({
        "type": "case",
        "project": outcome.id().project,
        "commit": outcome.id().commit,
        "rule": outcome.rule_name(),
        "inputs": inputs,
        "passed": outcome.passed(),
        "mismatches": mismatches,
    });
    writeln!(out, "{record}")
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Writes the final summary line to `out`.
///
/// # Errors
///
/// Propagates any write error on `out`.
pub fn write_summary<W: Write>(
    out: &mut W,
    passed: usize,
    failed: usize,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            let total = passed + failed;
            if failed == 0 {
                if config.colors {
                    writeln!(out, "{GREEN}{total} case(s): all passed{RESET}")
                } else {
                    writeln!(out, "{total} case(s): all passed")
                }
            } else if config.colors {
                writeln!(
                    out,
                    "{RED}{total} case(s): {passed} passed, {failed} failed{RESET}"
                )
            } else {
                writeln!(out, "{total} case(s): {passed} passed, {failed} failed")
            }
        }
        FormatMode::Json => {
            let record = serde_json::json!({
                "type": "summary",
                "passed": passed,
                "failed": failed,
                "total": passed + failed,
            });
            writeln!(out, "{record}")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
