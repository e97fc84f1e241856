/// JSON corpus manifest: the serialized form a corpus is populated from.
///
/// A manifest is harness-owned configuration, so unknown fields are
/// rejected rather than tolerated; a typo in a case definition should fail
/// at load time, loudly.
///
/// ```json
/// {
///   "fixture_root": "fixtures",
///   "cases": [
///     {
///       "project": "guava",
///       "commit": "b80de0e",
///       "rule": "avoid-static-import",
///       "attributes": { "excludes": "java.lang.Math.*" },
///       "inputs": ["guava-b80de0e/InputImports.java"],
///       "expected": ["13:9: Using a static member import should be avoided - x."]
///     }
///   ]
/// }
/// ```
use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::corpus::{CaseId, Corpus, FixtureCase};
use crate::error::HarnessError;
use crate::expect::ExpectedEntry;
use crate::registry::RuleRegistry;

// ---------------------------------------------------------------------------
// Serde model
// ---------------------------------------------------------------------------

/// The root of a corpus manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Directory relative input paths resolve against. Optional: callers may
    /// supply the fixture root out of band (e.g. a CLI flag).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture_root: Option<PathBuf>,
    /// Optional path to a message-catalog JSON file to load alongside.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Every fixture case, in definition order.
    #[serde(default)]
    pub cases: Vec<ManifestCase>,
}

/// One case entry in a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestCase {
    /// Originating project (traceability only).
    pub project: String,
    /// Originating commit (traceability only).
    pub commit: String,
    /// The registry name of the rule to run.
    pub rule: String,
    /// Attribute name/value pairs applied to the rule's configuration.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Ordered input paths, relative to the fixture root.
    pub inputs: Vec<PathBuf>,
    /// Expected entries in the `"<line>[:<column>]: <text>"` grammar.
    #[serde(default)]
    pub expected: Vec<String>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Manifest {
    /// Parses a manifest from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] (with line/column) when
    /// the text is not a valid manifest.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Converts the manifest into a [`Corpus`], resolving every rule name
    /// against `registry` and parsing every expected literal.
    ///
    /// Consumes the manifest: the corpus owns its cases afterwards.
    ///
    /// # Errors
    ///
    /// - [`HarnessError::UnknownRule`] for a rule name the registry cannot
    ///   resolve.
    /// - [`HarnessError::MalformedExpectation`] for an expected string
    ///   outside the grammar.
    pub fn into_corpus(self, registry: &RuleRegistry) -> Result<Corpus, HarnessError> {
        let mut corpus = Corpus::new();
        for case in self.cases {
            let mut config = registry.config(&case.rule)?;
            for (name, value) in &case.attributes {
                config = config.with_attribute(name, value);
            }
            let expected = ExpectedEntry::parse_list(&case.expected)?;
            corpus.push(FixtureCase::new(
                CaseId::new(case.project, case.commit),
                config,
                case.inputs,
                expected,
            ));
        }
        Ok(corpus)
    }
}
