/// Validated locale tag for message resolution.
///
/// [`Locale`] enforces a `language[-REGION]` shape at construction time via
/// [`TryFrom<&str>`]: a two- or three-letter lowercase language subtag,
/// optionally followed by a two-letter uppercase region subtag. Once
/// constructed the inner value is immutable. Serde `Deserialize` re-runs
/// validation so invalid tags cannot enter the type system from untrusted
/// JSON.
///
/// The resolution fallback chain in
/// [`MessageCatalog::resolve`](crate::messages::MessageCatalog::resolve) uses
/// [`Locale::language`] to derive the language-only fallback from a regional
/// tag; the root bundle is the final fallback and has no `Locale` of its own.
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Error produced when constructing a [`Locale`] from an invalid tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The tag did not match the expected `language[-REGION]` shape.
    InvalidTag {
        /// The input that was rejected.
        got: String,
    },
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTag { got } => {
                write!(
                    f,
                    "invalid locale tag: expected \"language[-REGION]\" \
                     (e.g. \"en\" or \"en-US\"), got {got:?}"
                )
            }
        }
    }
}

impl std::error::Error for LocaleError {}

// ---------------------------------------------------------------------------
// Regex static
//
// The pattern is a compile-time string literal; Regex::new never returns Err
// for it. The fallback chain is required because the workspace bans expect()
// and unwrap(), but "a^" (a pattern that never matches) is always valid, so
// we use it as a safe fallback that satisfies the type checker.
// ---------------------------------------------------------------------------

/// Matches a lowercase language subtag with an optional uppercase region.
static LOCALE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2,3}(-[A-Z]{2})?$").unwrap_or_else(|_| {
        // Never reached: the pattern above is always valid.
        Regex::new("a^").unwrap_or_else(|_| {
            Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken"))
        })
    })
});

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// A locale tag in `language[-REGION]` form, e.g. `"en"` or `"en-US"`.
///
/// Construct via [`TryFrom<&str>`]:
///
/// ```
/// use rulegold_core::Locale;
///
/// let locale = Locale::try_from("en-US")?;
/// assert_eq!(locale.language(), "en");
/// assert_eq!(locale.region(), Some("US"));
/// # Ok::<(), rulegold_core::LocaleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale(String);

impl Locale {
    /// Returns the language subtag (the part before the `-`, or the whole
    /// tag when no region is present).
    pub fn language(&self) -> &str {
        match self.0.split_once('-') {
            Some((lang, _)) => lang,
            None => &self.0,
        }
    }

    /// Returns the region subtag when present.
    pub fn region(&self) -> Option<&str> {
        self.0.split_once('-').map(|(_, region)| region)
    }

    /// Returns `true` when the tag carries a region subtag.
    pub fn has_region(&self) -> bool {
        self.0.contains('-')
    }

    /// Returns the full tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Locale {
    type Error = LocaleError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if LOCALE_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(LocaleError::InvalidTag { got: s.to_owned() })
        }
    }
}

impl Deref for Locale {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
