/// The fixture corpus: addressable cases spanning many unrelated projects.
///
/// A [`Corpus`] is populated once at test-definition time and read-only
/// afterwards; nothing in the runner or comparator mutates it. Each
/// [`FixtureCase`] is independent of every other (configurations are
/// copy-on-write and the rule is instantiated fresh per case), so cases may
/// be sharded or cancelled between runs freely. The harness itself runs
/// them sequentially: within a case the read→evaluate→compare steps are
/// strictly ordered, and no ordering guarantee is needed between cases.
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::config::RuleConfig;
use crate::diagnostic::Diagnostic;
use crate::error::HarnessError;
use crate::expect::{ComparisonResult, ExpectedEntry, compare};
use crate::runner::FixtureRunner;

// ---------------------------------------------------------------------------
// CaseId
// ---------------------------------------------------------------------------

/// Identity of a case's originating source snapshot.
///
/// `project` and `commit` are opaque strings used only for traceability and
/// reporting, never for behavior branching.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaseId {
    /// The third-party project the fixture was harvested from.
    pub project: String,
    /// The snapshot commit identifier.
    pub commit: String,
}

impl CaseId {
    /// Constructs a [`CaseId`].
    pub fn new(project: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            commit: commit.into(),
        }
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.project, self.commit)
    }
}

// ---------------------------------------------------------------------------
// FixtureCase
// ---------------------------------------------------------------------------

/// One regression fixture: a configuration, ordered inputs, and the literal
/// expected output.
///
/// Invariant: `expected` is ordered to match the engine's deterministic
/// emission order (by file, then line, then column). The comparator holds
/// both sides as-is and never reorders either.
#[derive(Debug, Clone)]
pub struct FixtureCase {
    id: CaseId,
    config: RuleConfig,
    inputs: Vec<PathBuf>,
    expected: Vec<ExpectedEntry>,
}

impl FixtureCase {
    /// Constructs a case. The inputs keep their given order.
    pub fn new(
        id: CaseId,
        config: RuleConfig,
        inputs: Vec<PathBuf>,
        expected: Vec<ExpectedEntry>,
    ) -> Self {
        Self {
            id,
            config,
            inputs,
            expected,
        }
    }

    /// The case's traceability identity.
    pub fn id(&self) -> &CaseId {
        &self.id
    }

    /// The rule configuration this case runs with.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// The ordered input paths, relative to the fixture root.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// The ordered expected entries.
    pub fn expected(&self) -> &[ExpectedEntry] {
        &self.expected
    }
}

// ---------------------------------------------------------------------------
// CaseOutcome
// ---------------------------------------------------------------------------

/// The verdict for one executed case.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    id: CaseId,
    rule_name: String,
    inputs: Vec<PathBuf>,
    diagnostics: Vec<Diagnostic>,
    comparison: ComparisonResult,
}

impl CaseOutcome {
    /// `true` when the produced diagnostics matched the expected list.
    pub fn passed(&self) -> bool {
        self.comparison.matched()
    }

    /// The case's traceability identity.
    pub fn id(&self) -> &CaseId {
        &self.id
    }

    /// The rule the case exercised.
    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    /// The input paths the case ran over.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Every diagnostic the run produced, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The full comparison, mismatch by mismatch.
    pub fn comparison(&self) -> &ComparisonResult {
        &self.comparison
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            write!(f, "{} [{}]: ok", self.id, self.rule_name)
        } else {
            write!(
                f,
                "{} [{}]: {} mismatch(es)",
                self.id,
                self.rule_name,
                self.comparison.mismatches().len()
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Corpus
// ---------------------------------------------------------------------------

/// The full, read-only collection of fixture cases.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    cases: Vec<FixtureCase>,
}

impl Corpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a case, preserving definition order.
    pub fn push(&mut self, case: FixtureCase) {
        self.cases.push(case);
    }

    /// The number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// `true` when the corpus holds no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterates over the cases in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &FixtureCase> {
        self.cases.iter()
    }

    /// Enumerates the cases grouped by originating (project, commit), in
    /// lexicographic group order; within a group, definition order holds.
    pub fn grouped(&self) -> BTreeMap<&CaseId, Vec<&FixtureCase>> {
        let mut groups: BTreeMap<&CaseId, Vec<&FixtureCase>> = BTreeMap::new();
        for case in &self.cases {
            groups.entry(case.id()).or_default().push(case);
        }
        groups
    }

    /// Runs every case through `runner`, in definition order.
    ///
    /// # Errors
    ///
    /// The first harness-fatal error aborts the whole run; a failed
    /// comparison is not an error and lands in its [`CaseOutcome`] instead.
    pub fn run(&self, runner: &FixtureRunner<'_>) -> Result<Vec<CaseOutcome>, HarnessError> {
        let mut outcomes = Vec::with_capacity(self.cases.len());
        for case in &self.cases {
            let diagnostics = runner.run(case.config(), case.inputs())?;
            let comparison = compare(case.expected(), &diagnostics);
            outcomes.push(CaseOutcome {
                id: case.id().clone(),
                rule_name: case.config().rule_name().to_owned(),
                inputs: case.inputs().to_vec(),
                diagnostics,
                comparison,
            });
        }
        Ok(outcomes)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a FixtureCase;
    type IntoIter = std::slice::Iter<'a, FixtureCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}
