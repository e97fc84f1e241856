/// The fixture runner: read inputs, evaluate the rule, collect diagnostics.
///
/// [`FixtureRunner::run`] drives one configured rule over an ordered input
/// list and returns the diagnostics in deterministic order: per-input
/// sequences in the engine's emission order, concatenated in input order,
/// never interleaved or re-sorted across files.
///
/// The two failure worlds are kept strictly apart:
///
/// - An *unreadable input* is an expected, reportable condition. The runner
///   appends exactly one synthesized diagnostic (line 0, key
///   [`GENERAL_EXCEPTION_KEY`], message `"<absolute path> (<os error>)"`)
///   and never invokes the rule on that input.
/// - An *engine failure* (rejected attribute, rule error on readable input)
///   is a defect in the test setup or the engine and propagates as
///   [`HarnessError::Evaluation`].
use std::io;
use std::path::{Path, PathBuf};

use crate::config::RuleConfig;
use crate::diagnostic::{Diagnostic, HARNESS_LINE};
use crate::engine::{Check, Finding, SourceText};
use crate::error::HarnessError;
use crate::locale::Locale;
use crate::messages::{GENERAL_EXCEPTION_KEY, HARNESS_BUNDLE, MessageCatalog};
use crate::registry::RuleRegistry;


// ---------------------------------------------------------------------------
// FixtureRunner
// ---------------------------------------------------------------------------

/// Runs configured rules over fixture inputs.
///
/// Holds shared references to the registry and the catalog (both read-only
/// after load) plus the fixture-root directory relative input paths resolve
/// against. The runner itself is stateless across [`run`][FixtureRunner::run]
/// calls: every call instantiates a fresh rule, so no state leaks between
/// fixture cases.
#[derive(Debug, Clone)]
pub struct FixtureRunner<'a> {
    registry: &'a RuleRegistry,
    catalog: &'a MessageCatalog,
    fixture_root: PathBuf,
    locale: Locale,
}

impl<'a> FixtureRunner<'a> {
    /// Creates a runner resolving inputs against `fixture_root`.
    ///
    /// Messages resolve for the root English locale; use
    /// [`with_locale`][FixtureRunner::with_locale] to change that.
    pub fn new(
        registry: &'a RuleRegistry,
        catalog: &'a MessageCatalog,
        fixture_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            catalog,
            fixture_root: fixture_root.into(),
            locale: Locale::try_from("en").unwrap_or_else(|_| unreachable!("\"en\" is a valid tag")),
        }
    }

    /// Returns the runner with its resolution locale replaced.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The directory relative input paths resolve against.
    pub fn fixture_root(&self) -> &Path {
        &self.fixture_root
    }

    /// The locale diagnostics resolve in.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Runs the configured rule over `inputs`, in the order supplied.
    ///
    /// # Errors
    ///
    /// - [`HarnessError::UnknownRule`] when the configuration names an
    ///   unregistered rule.
    /// - [`HarnessError::Evaluation`] when the rule rejects an attribute or
    ///   fails on a readable input.
    /// - [`HarnessError::MessageNotFound`] / [`HarnessError::TemplateMismatch`]
    ///   when a finding's message cannot be resolved.
    pub fn run(
        &self,
        config: &RuleConfig,
        inputs: &[PathBuf],
    ) -> Result<Vec<Diagnostic>, HarnessError> {
        let mut rule = self.registry.instantiate(config.rule_name())?;
        rule.configure(config.attributes())
            .map_err(|e| HarnessError::Evaluation {
                rule: config.rule_name().to_owned(),
                detail: e.to_string(),
            })?;

        let mut diagnostics = Vec::new();
        for input in inputs {
            let path = self.resolve_input(input);
            match std::fs::read_to_string(&path) {
                Err(err) => diagnostics.push(self.unreadable_diagnostic(&path, &err)?),
                Ok(text) => {
                    let source = SourceText::new(path, text);
                    let findings =
                        rule.check(&source).map_err(|e| HarnessError::Evaluation {
                            rule: config.rule_name().to_owned(),
                            detail: e.to_string(),
                        })?;
                    for finding in findings {
                        diagnostics.push(self.resolve_finding(rule.as_ref(), finding)?);
                    }
                }
            }
        }
        Ok(diagnostics)
    }

    /// Resolves `input` against the fixture root; absolute paths pass
    /// through untouched.
    fn resolve_input(&self, input: &Path) -> PathBuf {
        if input.is_absolute() {
            input.to_owned()
        } else {
            self.fixture_root.join(input)
        }
    }

    /// Builds the single synthesized diagnostic for an unreadable input.
    fn unreadable_diagnostic(
        &self,
        path: &Path,
        err: &io::Error,
    ) -> Result<Diagnostic, HarnessError> {
        let absolute = absolute_path(path);
        let arg = format!("{} ({})", absolute.display(), os_error_text(err));
        let args = vec![arg];
        let resolved =
            self.catalog
                .resolve(HARNESS_BUNDLE, GENERAL_EXCEPTION_KEY, &args, &self.locale)?;
        Ok(Diagnostic::new(
            HARNESS_LINE,
            None,
            GENERAL_EXCEPTION_KEY,
            args,
            resolved,
        ))
    }

    /// Resolves one engine finding into a diagnostic.
    fn resolve_finding(
        &self,
        rule: &dyn Check,
        finding: Finding,
    ) -> Result<Diagnostic, HarnessError> {
        let resolved = self.catalog.resolve(
            rule.bundle(),
            &finding.message_key,
            &finding.message_args,
            &self.locale,
        )?;
        Ok(Diagnostic::new(
            finding.line,
            finding.column,
            finding.message_key,
            finding.message_args,
            resolved,
        ))
    }
}

// ---------------------------------------------------------------------------
// OS error text
// ---------------------------------------------------------------------------

/// Returns the OS-native absolute form of `path` without touching the
/// filesystem.
///
/// `std::fs::canonicalize` fails for paths that do not exist, and the most
/// common caller here is reporting exactly such a path, so the lexical
/// [`std::path::absolute`] is used instead.
fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_owned())
}

/// Extracts the plain OS error description from an [`io::Error`].
///
/// std renders OS errors as `"No such file or directory (os error 2)"`;
/// synthesized failure messages embed the classic strerror wording without
/// the numeric suffix, so the suffix is stripped when present.
fn os_error_text(err: &io::Error) -> String {
    let text = err.to_string();
    if text.ends_with(')') {
        if let Some(idx) = text.rfind(" (os error ") {
            return text[..idx].to_owned();
        }
    }
    text
}
