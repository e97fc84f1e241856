/// Expected-entry parsing and the strict positional comparator.
///
/// An [`ExpectedEntry`] is one literal line of a fixture's expected output in
/// the fixed grammar `"<line>: <text>"` or `"<line>:<column>: <text>"`. The
/// grammar is preserved exactly so existing fixture definitions keep working
/// verbatim.
///
/// [`compare`] holds an expected sequence against the diagnostics a run
/// produced. It never reorders either side, never normalizes text, and never
/// stops at the first difference: the result carries every mismatching
/// index, including one trailing entry per missing or extra diagnostic, so a
/// single run reports the complete diff.
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::Diagnostic;
use crate::error::HarnessError;

#[cfg(test)]
mod tests;

// ---------------------------------------------------------------------------
// Expected-entry grammar
//
// The pattern is a compile-time string literal; Regex::new never returns Err
// for it. The fallback chain is required because the workspace bans expect()
// and unwrap(), but "a^" (a pattern that never matches) is always valid, so
// we use it as a safe fallback that satisfies the type checker.
// ---------------------------------------------------------------------------

/// Matches `<line>[:<column>]: <text>`.
static EXPECTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?::(\d+))?: (.*)$").unwrap_or_else(|_| {
        // Never reached: the pattern above is always valid.
        Regex::new("a^").unwrap_or_else(|_| {
            Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken"))
        })
    })
});

// ---------------------------------------------------------------------------
// ExpectedEntry
// ---------------------------------------------------------------------------

/// One parsed expected-output line, immutable once parsed.
///
/// The original literal is retained verbatim; comparison uses the literal,
/// not a re-rendering, so no formatting drift can creep in between parsing
/// and comparing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedEntry {
    line: u32,
    column: Option<u32>,
    literal: String,
}

impl ExpectedEntry {
    /// Parses a single `"<line>[:<column>]: <text>"` literal.
    ///
    /// # Errors
    ///
    /// [`HarnessError::MalformedExpectation`] when `text` does not match the
    /// grammar (including line or column values that overflow `u32`).
    pub fn parse(text: &str) -> Result<Self, HarnessError> {
        let malformed = || HarnessError::MalformedExpectation {
            text: text.to_owned(),
        };
        let captures = EXPECTED_RE.captures(text).ok_or_else(malformed)?;

        let line = captures
            .get(1)
            .ok_or_else(malformed)?
            .as_str()
            .parse::<u32>()
            .map_err(|_| malformed())?;
        let column = match captures.get(2) {
            None => None,
            Some(m) => Some(m.as_str().parse::<u32>().map_err(|_| malformed())?),
        };

        Ok(Self {
            line,
            column,
            literal: text.to_owned(),
        })
    }

    /// Parses a whole expected list, preserving order.
    ///
    /// # Errors
    ///
    /// The first [`HarnessError::MalformedExpectation`] encountered; a
    /// malformed expectation is a test-definition bug, so there is nothing
    /// useful to collect past it.
    pub fn parse_list<I, S>(texts: I) -> Result<Vec<Self>, HarnessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| Self::parse(text.as_ref()))
            .collect()
    }

    /// The expected 1-based line (0 for harness-level entries).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The expected column, when the literal carries one.
    pub fn column(&self) -> Option<u32> {
        self.column
    }

    /// The original literal, verbatim.
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for ExpectedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// One position where expected and actual disagree.
///
/// `expected` is `None` for an extra trailing diagnostic; `actual` is `None`
/// for a missing one. Both are present for a content mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// The position in the compared sequences.
    pub index: usize,
    /// The expected literal at this index, when one exists.
    pub expected: Option<String>,
    /// The formatted actual diagnostic at this index, when one exists.
    pub actual: Option<String>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.expected, &self.actual) {
            (Some(expected), Some(actual)) => {
                write!(
                    f,
                    "at index {}: expected {expected:?}, got {actual:?}",
                    self.index
                )
            }
            (Some(expected), None) => {
                write!(f, "at index {}: expected {expected:?}, got nothing", self.index)
            }
            (None, Some(actual)) => {
                write!(f, "at index {}: unexpected extra {actual:?}", self.index)
            }
            (None, None) => write!(f, "at index {}: (empty mismatch)", self.index),
        }
    }
}

/// The outcome of comparing one fixture's expected and actual sequences.
///
/// Stores only the mismatch list; [`matched`][ComparisonResult::matched]
/// derives the verdict, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparisonResult {
    mismatches: Vec<Mismatch>,
}

impl ComparisonResult {
    /// `true` when every position matched and the lengths agree.
    pub fn matched(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Every mismatching position, in index order.
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }
}

/// Compares `expected` against `actual`, position by position.
///
/// `expected[i].literal()` is held against `actual[i]` rendered as
/// `"<line>[:<column>]: <text>"` via [`Diagnostic::formatted`]. Exact string
/// equality is required: no normalization of whitespace, case, or
/// punctuation. The strictness is the point; the harness exists to catch
/// accidental wording or line-number drift.
///
/// When the sequences differ in length, each index past the shorter one
/// contributes its own trailing mismatch.
pub fn compare(expected: &[ExpectedEntry], actual: &[Diagnostic]) -> ComparisonResult {
    let mut mismatches = Vec::new();
    let longest = expected.len().max(actual.len());

    for index in 0..longest {
        let want = expected.get(index);
        let got = actual.get(index);
        let differs = match (want, got) {
            (Some(want), Some(got)) => want.literal() != got.formatted(),
            _ => true,
        };
        if differs {
            mismatches.push(Mismatch {
                index,
                expected: want.map(|e| e.literal().to_owned()),
                actual: got.map(Diagnostic::formatted),
            });
        }
    }

    ComparisonResult { mismatches }
}
