//! Implementation of `rulegold run <manifest>`.
//!
//! Parses a corpus manifest, builds the corpus against the reference
//! registry, runs every case, and emits per-case reports plus a summary to
//! stdout.
//!
//! Flags:
//! - `--fixture-root <dir>`: overrides the manifest's own fixture root.
//! - `--locale <tag>` (default `en`): locale diagnostics resolve in.
//!
//! Exit codes:
//! - 0 = every fixture case matched its expected output
//! - 1 = one or more cases mismatched
//! - 2 = input or setup failure (unreadable/unparseable manifest or catalog,
//!   unknown rule, malformed expectation, engine defect)
use std::io::Write;
use std::path::PathBuf;

use rulegold_core::{
    FixtureRunner, Locale, Manifest, MessageCatalog, reference_catalog, reference_registry,
};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, write_outcome, write_summary};

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the `run` command.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] — the manifest or catalog is not valid JSON.
/// - [`CliError::InvalidLocale`] — the `--locale` value is malformed.
/// - [`CliError::Harness`] — the harness reported a fatal setup or engine
///   error.
/// - [`CliError::FixturesFailed`] — the run completed with mismatches.
pub fn run(
    content: &str,
    fixture_root_flag: Option<PathBuf>,
    locale_tag: &str,
    format: &OutputFormat,
    quiet: bool,
    no_color: bool,
    max_file_size: u64,
) -> Result<(), CliError> {
    let mode = match format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let fmt_config = FormatterConfig::from_flags(no_color, quiet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let (passed, failed) = execute(
        content,
        fixture_root_flag,
        locale_tag,
        max_file_size,
        mode,
        &fmt_config,
        &mut out,
    )?;

    if failed > 0 {
        Err(CliError::FixturesFailed {
            failed,
            total: passed + failed,
        })
    } else {
        Ok(())
    }
}

/// The testable command body: everything except stdout acquisition and the
/// final exit-code mapping.
///
/// Returns `(passed, failed)` case counts.
///
/// # Errors
///
/// See [`run`]; [`CliError::FixturesFailed`] is produced by the caller, not
/// here.
pub fn execute<W: Write>(
    content: &str,
    fixture_root_flag: Option<PathBuf>,
    locale_tag: &str,
    max_file_size: u64,
    mode: FormatMode,
    fmt_config: &FormatterConfig,
    out: &mut W,
) -> Result<(usize, usize), CliError> {
    // --- Parse the manifest ---
    let manifest = Manifest::from_json_str(content).map_err(|e| CliError::ParseFailed {
        source: "manifest".to_owned(),
        detail: format!("line {}, column {}: {e}", e.line(), e.column()),
    })?;

    // --- Resolve the locale ---
    let locale = Locale::try_from(locale_tag).map_err(|_| CliError::InvalidLocale {
        got: locale_tag.to_owned(),
    })?;

    // --- Fixture root: flag wins over the manifest's own setting ---
    let fixture_root = fixture_root_flag
        .or_else(|| manifest.fixture_root.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    // --- Catalog: reference templates, plus an optional overlay file ---
    let mut catalog = reference_catalog();
    if let Some(catalog_path) = manifest.catalog.clone() {
        let resolved = if catalog_path.is_absolute() {
            catalog_path
        } else {
            fixture_root.join(catalog_path)
        };
        let catalog_text = crate::io::read_file(&resolved, max_file_size)?;
        let overlay =
            MessageCatalog::from_json_str(&catalog_text).map_err(|e| CliError::ParseFailed {
                source: resolved.display().to_string(),
                detail: format!("line {}, column {}: {e}", e.line(), e.column()),
            })?;
        catalog.merge(overlay);
    }

    // --- Build the corpus and run it ---
    let registry = reference_registry();
    let corpus = manifest
        .into_corpus(&registry)
        .map_err(|e| CliError::Harness {
            detail: e.to_string(),
        })?;
    let runner = FixtureRunner::new(&registry, &catalog, fixture_root).with_locale(locale);
    let outcomes = corpus.run(&runner).map_err(|e| CliError::Harness {
        detail: e.to_string(),
    })?;

    // --- Report ---
    let mut passed = 0usize;
    let mut failed = 0usize;
    for outcome in &outcomes {
        if outcome.passed() {
            passed += 1;
        } else {
            failed += 1;
        }
        write_outcome(out, outcome, mode, fmt_config).map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        })?;
    }
    write_summary(out, passed, failed, mode, fmt_config).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })?;

    Ok((passed, failed))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
