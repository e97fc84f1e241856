/// Locale-aware message catalog with deterministic fallback.
///
/// [`MessageCatalog`] is the injectable store the harness resolves every
/// diagnostic message through. It is explicitly constructed (no process-wide
/// singleton), loaded once, and treated as read-only afterwards; the
/// [`FixtureRunner`](crate::runner::FixtureRunner) receives it by reference.
///
/// Resolution walks a fixed fallback chain: the specific locale (`"en-US"`),
/// then the language-only locale (`"en"`), then the bundle's root templates.
/// Substitution is positional (`{0}`, `{1}`, …) and strict in both
/// directions: a placeholder with no argument and an argument no placeholder
/// consumes are both a [`HarnessError::TemplateMismatch`].
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;
use crate::locale::Locale;


/// The bundle id reserved for harness-level messages.
pub const HARNESS_BUNDLE: &str = "harness";

/// The key the [`FixtureRunner`](crate::runner::FixtureRunner) resolves for
/// an unreadable input file. The root template is `"{0}"`: the resolved text
/// is exactly the single argument, `"<path> (<os error>)"`.
pub const GENERAL_EXCEPTION_KEY: &str = "general.exception";

// ---------------------------------------------------------------------------
// Bundle
// ---------------------------------------------------------------------------

/// One named group of templates: per-locale maps plus the root fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Bundle {
    /// Templates with no locale; the final fallback.
    #[serde(default)]
    root: BTreeMap<String, String>,
    /// Templates keyed by locale tag, then by message key.
    #[serde(default)]
    locales: BTreeMap<String, BTreeMap<String, String>>,
}

impl Bundle {
    /// Looks `key` up through the fallback chain for `locale`.
    fn template(&self, key: &str, locale: &Locale) -> Option<&str> {
        if let Some(map) = self.locales.get(locale.as_str()) {
            if let Some(t) = map.get(key) {
                return Some(t);
            }
        }
        if locale.has_region() {
            if let Some(map) = self.locales.get(locale.language()) {
                if let Some(t) = map.get(key) {
                    return Some(t);
                }
            }
        }
        self.root.get(key).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// MessageCatalog
// ---------------------------------------------------------------------------

/// The locale-keyed key→template store.
///
/// # Lifecycle
///
/// Build the catalog once (programmatically via
/// [`add_template`][MessageCatalog::add_template], or from JSON via
/// [`from_json_str`][MessageCatalog::from_json_str]), then share it by
/// reference. Nothing in the harness mutates a catalog after load.
///
/// Every catalog carries the harness bundle
/// ([`HARNESS_BUNDLE`]/[`GENERAL_EXCEPTION_KEY`]) so synthesized failure
/// diagnostics always resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    #[serde(default)]
    bundles: BTreeMap<String, Bundle>,
}

impl MessageCatalog {
    /// Creates a catalog containing only the harness defaults.
    pub fn new() -> Self {
        let mut catalog = Self {
            bundles: BTreeMap::new(),
        };
        catalog.seed_harness_defaults();
        catalog
    }

    /// Parses a catalog from its JSON form and seeds the harness defaults
    /// when the input does not override them.
    ///
    /// The JSON shape mirrors the in-memory one:
    ///
    /// ```json
    /// {
    ///   "bundles": {
    ///     "checks": {
    ///       "root": { "file.containsTab": "Line contains a tab character." },
    ///       "locales": { "de": { "file.containsTab": "..." } }
    ///     }
    ///   }
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the input is not
    /// valid JSON of this shape.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let mut catalog: Self = serde_json::from_str(json)?;
        catalog.seed_harness_defaults();
        Ok(catalog)
    }

    /// Adds (or replaces) a single template.
    ///
    /// `locale = None` targets the bundle's root templates.
    pub fn add_template(
        &mut self,
        bundle: &str,
        locale: Option<&Locale>,
        key: &str,
        template: &str,
    ) {
        let bundle = self.bundles.entry(bundle.to_owned()).or_default();
        let map = match locale {
            None => &mut bundle.root,
            Some(locale) => bundle.locales.entry(locale.as_str().to_owned()).or_default(),
        };
        map.insert(key.to_owned(), template.to_owned());
    }

    /// Overlays every template from `other` onto this catalog; templates in
    /// `other` win on key collisions.
    pub fn merge(&mut self, other: MessageCatalog) {
        for (id, incoming) in other.bundles {
            let bundle = self.bundles.entry(id).or_default();
            bundle.root.extend(incoming.root);
            for (tag, map) in incoming.locales {
                bundle.locales.entry(tag).or_default().extend(map);
            }
        }
    }

    /// Resolves `key` in `bundle_id` for `locale` and substitutes `args`.
    ///
    /// Pure: the same `(bundle, key, args, locale)` always yields the same
    /// string.
    ///
    /// # Errors
    ///
    /// - [`HarnessError::MessageNotFound`] when the bundle is unknown or the
    ///   key is absent for every locale in the fallback chain.
    /// - [`HarnessError::TemplateMismatch`] when the template and `args`
    ///   disagree (see [`substitute`]).
    pub fn resolve(
        &self,
        bundle_id: &str,
        key: &str,
        args: &[String],
        locale: &Locale,
    ) -> Result<String, HarnessError> {
        let not_found = || HarnessError::MessageNotFound {
            bundle: bundle_id.to_owned(),
            key: key.to_owned(),
            locale: locale.as_str().to_owned(),
        };
        let template = self
            .bundles
            .get(bundle_id)
            .and_then(|b| b.template(key, locale))
            .ok_or_else(not_found)?;
        substitute(template, args, bundle_id, key)
    }

    /// Inserts the harness bundle entries that are not already present.
    fn seed_harness_defaults(&mut self) {
        let harness = self.bundles.entry(HARNESS_BUNDLE.to_owned()).or_default();
        harness
            .root
            .entry(GENERAL_EXCEPTION_KEY.to_owned())
            .or_insert_with(|| "{0}".to_owned());
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Positional substitution
// ---------------------------------------------------------------------------

/// Substitutes positional placeholders (`{0}`, `{1}`, …) in `template`.
///
/// A `{` that does not open a well-formed `{<digits>}` sequence is literal
/// text. Substitution never reorders or drops arguments: every placeholder
/// index must have an argument, and every argument must be consumed by at
/// least one placeholder.
///
/// # Errors
///
/// [`HarnessError::TemplateMismatch`] when either direction of the
/// correspondence fails.
fn substitute(
    template: &str,
    args: &[String],
    bundle_id: &str,
    key: &str,
) -> Result<String, HarnessError> {
    let mismatch = |detail: String| HarnessError::TemplateMismatch {
        bundle: bundle_id.to_owned(),
        key: key.to_owned(),
        detail,
    };

    let mut out = String::with_capacity(template.len());
    let mut consumed = vec![false; args.len()];
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        out.push_str(literal);

        match placeholder_index(tail) {
            Some((index, after)) => {
                match args.get(index) {
                    Some(arg) => {
                        out.push_str(arg);
                        consumed[index] = true;
                    }
                    None => {
                        return Err(mismatch(format!(
                            "placeholder {{{index}}} has no argument ({} given)",
                            args.len()
                        )));
                    }
                }
                rest = after;
            }
            None => {
                // Literal brace: emit it and continue after it.
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);

    if let Some(unused) = consumed.iter().position(|c| !c) {
        return Err(mismatch(format!(
            "argument {unused} is never consumed by the template"
        )));
    }

    Ok(out)
}

/// Parses a `{<digits>}` prefix of `tail` (which starts with `{`).
///
/// Returns the placeholder index and the remainder after the closing `}`,
/// or `None` when the prefix is not a well-formed placeholder.
fn placeholder_index(tail: &str) -> Option<(usize, &str)> {
    let body = &tail[1..];
    let close = body.find('}')?;
    let digits = &body[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse::<usize>().ok()?;
    Some((index, &body[close + 1..]))
}
