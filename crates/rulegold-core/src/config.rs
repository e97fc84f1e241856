/// Per-case rule configuration with copy-on-write attributes.
///
/// A [`RuleConfig`] names a rule and carries a string attribute bag the rule
/// consumes at initialization. Configurations are created through
/// [`RuleRegistry::config`](crate::registry::RuleRegistry::config) (which is
/// where an unknown rule name is rejected), built up with
/// [`with_attribute`][RuleConfig::with_attribute], handed to one fixture
/// case, and discarded after the run.
///
/// Attribute *values* are never validated here: validation is delegated to
/// the rule at evaluation time, so a bad attribute surfaces as a run-time
/// evaluation failure rather than a configuration-time failure.
use std::collections::BTreeMap;
use std::sync::Arc;

/// An immutable, shareable rule configuration.
///
/// The attribute map sits behind an [`Arc`]; [`with_attribute`]
/// [RuleConfig::with_attribute] clones the map rather than mutating it, so
/// multiple test cases may safely start from one shared base configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    rule_name: String,
    attributes: Arc<BTreeMap<String, String>>,
}

impl RuleConfig {
    /// Creates an empty configuration for `rule_name`.
    ///
    /// Crate-private: callers go through
    /// [`RuleRegistry::config`](crate::registry::RuleRegistry::config) so the
    /// name is checked against the registry first.
    pub(crate) fn new(rule_name: &str) -> Self {
        Self {
            rule_name: rule_name.to_owned(),
            attributes: Arc::new(BTreeMap::new()),
        }
    }

    /// The name of the rule this configuration targets.
    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    /// The full attribute map, keyed by attribute name.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Looks up a single attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns a new configuration with `name` set to `value`.
    ///
    /// Copy-on-write: the receiver is left untouched, as is every other
    /// configuration sharing its attribute map. Setting an existing name
    /// replaces its value in the copy.
    #[must_use]
    pub fn with_attribute(&self, name: &str, value: &str) -> Self {
        let mut attributes = (*self.attributes).clone();
        attributes.insert(name.to_owned(), value.to_owned());
        Self {
            rule_name: self.rule_name.clone(),
            attributes: Arc::new(attributes),
        }
    }
}
