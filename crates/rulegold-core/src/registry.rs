/// Explicit rule registry: late binding by name, no reflection.
///
/// [`RuleRegistry`] maps a rule name to a constructor function for a boxed
/// [`Check`]. The map is populated at startup and read-only afterwards;
/// [`instantiate`][RuleRegistry::instantiate] resolves a name to a fresh
/// check instance per fixture case.
use std::collections::BTreeMap;

use crate::config::RuleConfig;
use crate::engine::Check;
use crate::error::HarnessError;

/// A constructor for a boxed check. Plain function pointer so registration
/// stays data, not behavior.
pub type CheckConstructor = fn() -> Box<dyn Check>;

/// The name → constructor map the harness instantiates rules from.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    constructors: BTreeMap<String, CheckConstructor>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor under the name its check reports.
    ///
    /// The constructor is probed once here so the registry key and
    /// [`Check::name`] can never disagree. Registering a second constructor
    /// for the same name replaces the first.
    pub fn register(&mut self, constructor: CheckConstructor) {
        let name = constructor().name().to_owned();
        self.constructors.insert(name, constructor);
    }

    /// Returns `true` when a constructor is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Iterates over the registered rule names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Creates a fresh, unconfigured instance of the named rule.
    ///
    /// # Errors
    ///
    /// [`HarnessError::UnknownRule`] when no constructor is registered under
    /// `name`.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn Check>, HarnessError> {
        match self.constructors.get(name) {
            Some(constructor) => Ok(constructor()),
            None => Err(HarnessError::UnknownRule {
                name: name.to_owned(),
            }),
        }
    }

    /// Creates an empty [`RuleConfig`] for the named rule.
    ///
    /// This is the configuration-builder entry point: the name is resolved
    /// against the registry here, so a typo fails at test-definition time
    /// rather than mid-run.
    ///
    /// # Errors
    ///
    /// [`HarnessError::UnknownRule`] when `name` is not registered.
    pub fn config(&self, name: &str) -> Result<RuleConfig, HarnessError> {
        if self.contains(name) {
            Ok(RuleConfig::new(name))
        } else {
            Err(HarnessError::UnknownRule {
                name: name.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::collections::BTreeMap;

    use super::*;
    use crate::engine::{EvalError, Finding, SourceText};

    struct Nop;

    impl Check for Nop {
        fn name(&self) -> &'static str {
            "nop"
        }

        fn bundle(&self) -> &'static str {
            "checks"
        }

        fn check(&self, _input: &SourceText) -> Result<Vec<Finding>, EvalError> {
            Ok(Vec::new())
        }
    }

    fn registry() -> RuleRegistry {
        let mut r = RuleRegistry::new();
        r.register(|| Box::new(Nop));
        r
    }

    #[test]
    fn register_uses_the_check_reported_name() {
        let r = registry();
        assert!(r.contains("nop"));
        assert_eq!(r.names().collect::<Vec<_>>(), vec!["nop"]);
    }

    #[test]
    fn instantiate_returns_a_fresh_instance() {
        let r = registry();
        let check = r.instantiate("nop").expect("registered");
        assert_eq!(check.name(), "nop");
    }

    #[test]
    fn instantiate_unknown_name_fails() {
        let r = registry();
        let err = r.instantiate("missing").err().expect("must fail");
        assert_eq!(
            err,
            HarnessError::UnknownRule {
                name: "missing".to_owned(),
            }
        );
    }

    #[test]
    fn config_checks_the_name_up_front() {
        let r = registry();
        let config = r.config("nop").expect("registered");
        assert_eq!(config.rule_name(), "nop");
        assert_eq!(config.attributes(), &BTreeMap::new());

        assert!(matches!(
            r.config("typo"),
            Err(HarnessError::UnknownRule { .. })
        ));
    }
}
