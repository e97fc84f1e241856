#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Golden-fixture verification harness for configurable source-code checks.
//!
//! The harness runs a named, attribute-configured rule over fixture inputs,
//! resolves each finding's message through a locale-aware catalog, and holds
//! the resulting diagnostic sequence against a literal expected list in the
//! `"<line>[:<column>]: <text>"` grammar, reporting every discrepancy at
//! once.

pub mod checks;
pub mod config;
pub mod corpus;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod expect;
pub mod locale;
pub mod manifest;
pub mod messages;
pub mod registry;
pub mod runner;

pub use checks::{
    AvoidStaticImport, CHECKS_BUNDLE, FileTabCharacter, install_messages, reference_catalog,
    reference_registry,
};
pub use config::RuleConfig;
pub use corpus::{CaseId, CaseOutcome, Corpus, FixtureCase};
pub use diagnostic::{Diagnostic, HARNESS_LINE};
pub use engine::{Check, EvalError, Finding, SourceText};
pub use error::HarnessError;
pub use expect::{ComparisonResult, ExpectedEntry, Mismatch, compare};
pub use locale::{Locale, LocaleError};
pub use manifest::{Manifest, ManifestCase};
pub use messages::{GENERAL_EXCEPTION_KEY, HARNESS_BUNDLE, MessageCatalog};
pub use registry::{CheckConstructor, RuleRegistry};
pub use runner::FixtureRunner;

/// Returns the current version of the rulegold-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
