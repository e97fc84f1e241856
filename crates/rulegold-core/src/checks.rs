/// Reference checks: the minimal built-in detectors the harness self-tests
/// with.
///
/// These exist so the harness can be exercised end-to-end (and driven from
/// the CLI) without the external engine. They are fixtures for the oracle
/// layer, not a rule library: detection is deliberate line scanning, since
/// source parsing is out of the harness's scope.
///
/// - [`AvoidStaticImport`] flags every `import static ...;` statement,
///   member-style or wildcard, minus an `excludes` list.
/// - [`FileTabCharacter`] flags the first tab character on each line.
///
/// Columns are 1-based byte offsets within the line.
use std::collections::BTreeMap;

use crate::engine::{Check, EvalError, Finding, SourceText};
use crate::locale::Locale;
use crate::messages::MessageCatalog;
use crate::registry::RuleRegistry;

#[cfg(test)]
mod tests;

/// The bundle id the reference checks resolve their messages from.
pub const CHECKS_BUNDLE: &str = "checks";

// ---------------------------------------------------------------------------
// Wiring helpers
// ---------------------------------------------------------------------------

/// Installs the reference checks' message templates into `catalog`.
pub fn install_messages(catalog: &mut MessageCatalog) {
    catalog.add_template(
        CHECKS_BUNDLE,
        None,
        "import.avoidStatic",
        "Using a static member import should be avoided - {0}.",
    );
    catalog.add_template(
        CHECKS_BUNDLE,
        None,
        "file.containsTab",
        "Line contains a tab character.",
    );
    // A language-level override exercising the fallback chain end-to-end.
    if let Ok(de) = Locale::try_from("de") {
        catalog.add_template(
            CHECKS_BUNDLE,
            Some(&de),
            "file.containsTab",
            "Zeile enthält ein Tabulatorzeichen.",
        );
    }
}

/// A registry with both reference checks installed.
pub fn reference_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(|| Box::new(AvoidStaticImport::new()));
    registry.register(|| Box::new(FileTabCharacter));
    registry
}

/// A catalog carrying the harness defaults plus the reference templates.
pub fn reference_catalog() -> MessageCatalog {
    let mut catalog = MessageCatalog::new();
    install_messages(&mut catalog);
    catalog
}

// ---------------------------------------------------------------------------
// AvoidStaticImport
// ---------------------------------------------------------------------------

/// Flags `import static` statements.
///
/// The single recognized attribute is `excludes`: a comma-separated pattern
/// list. A pattern excludes an import when it equals the imported name
/// exactly, or, for a `pkg.Class.*` pattern, when the name is a member of
/// `pkg.Class` (the wildcard import itself included).
#[derive(Debug, Clone, Default)]
pub struct AvoidStaticImport {
    excludes: Vec<String>,
}

impl AvoidStaticImport {
    /// Creates the check with an empty exclude list.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when `name` is covered by the configured exclude list.
    fn excluded(&self, name: &str) -> bool {
        self.excludes.iter().any(|pattern| {
            name == pattern
                || pattern.strip_suffix(".*").is_some_and(|owner| {
                    name.strip_prefix(owner)
                        .is_some_and(|rest| rest.starts_with('.'))
                })
        })
    }
}

impl Check for AvoidStaticImport {
    fn name(&self) -> &'static str {
        "avoid-static-import"
    }

    fn bundle(&self) -> &'static str {
        CHECKS_BUNDLE
    }

    fn configure(&mut self, attributes: &BTreeMap<String, String>) -> Result<(), EvalError> {
        for (name, value) in attributes {
            if name != "excludes" {
                return Err(EvalError::UnknownAttribute {
                    rule: self.name().to_owned(),
                    name: name.clone(),
                });
            }
            self.excludes = value
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_owned)
                .collect();
        }
        Ok(())
    }

    fn check(&self, input: &SourceText) -> Result<Vec<Finding>, EvalError> {
        let mut findings = Vec::new();
        for (number, line) in input.lines() {
            if let Some((column, name)) = static_import_name(line) {
                if !self.excluded(&name) {
                    findings.push(Finding::at(
                        number,
                        column,
                        "import.avoidStatic",
                        vec![name],
                    ));
                }
            }
        }
        Ok(findings)
    }
}

/// Parses a line as a static-import statement.
///
/// Returns the 1-based column where the imported name starts, plus the name
/// itself (wildcard suffix retained), or `None` when the line is not a
/// static import.
fn static_import_name(line: &str) -> Option<(u32, String)> {
    let indent = line.len() - line.trim_start().len();
    let rest = line.trim_start().strip_prefix("import static")?;
    let name_part = rest.trim_start();
    if name_part.len() == rest.len() {
        // "import staticfoo" is not an import-static statement.
        return None;
    }
    let name = name_part.trim_end().strip_suffix(';')?.trim_end();
    if name.is_empty() {
        return None;
    }

    let offset = indent + "import static".len() + (rest.len() - name_part.len());
    let column = u32::try_from(offset).unwrap_or(u32::MAX).saturating_add(1);
    Some((column, name.to_owned()))
}

// ---------------------------------------------------------------------------
// FileTabCharacter
// ---------------------------------------------------------------------------

/// Flags the first tab character on each line.
///
/// Recognizes no attributes; the default [`Check::configure`] rejects any.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTabCharacter;

impl Check for FileTabCharacter {
    fn name(&self) -> &'static str {
        "file-tab-character"
    }

    fn bundle(&self) -> &'static str {
        CHECKS_BUNDLE
    }

    fn check(&self, input: &SourceText) -> Result<Vec<Finding>, EvalError> {
        let mut findings = Vec::new();
        for (number, line) in input.lines() {
            if let Some(pos) = line.find('\t') {
                let column = u32::try_from(pos).unwrap_or(u32::MAX).saturating_add(1);
                findings.push(Finding::at(number, column, "file.containsTab", Vec::new()));
            }
        }
        Ok(findings)
    }
}
