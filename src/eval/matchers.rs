//! Condition matchers: pluggable operators for rule conditions.

use std::collections::HashMap;

use log::warn;
use regex::Regex;

use crate::parse;

/// A condition operator: decides whether a field value satisfies a
/// pattern. Implementations must be pure functions of their inputs so
/// rule evaluation stays deterministic.
pub trait Matcher: Send + Sync {
    fn matches(&self, value: &str, pattern: &str) -> bool;
}

/// True when the value is a compound shell command. Ignores the pattern.
struct IsCompound;

impl Matcher for IsCompound {
    fn matches(&self, value: &str, _pattern: &str) -> bool {
        parse::is_compound(value)
    }
}

/// Unanchored regular-expression search within the value.
///
/// Patterns are validated when the catalog is loaded; a pattern that
/// still fails to compile here is a non-match, never a panic.
struct RegexMatch;

impl Matcher for RegexMatch {
    fn matches(&self, value: &str, pattern: &str) -> bool {
        match Regex::new(pattern) {
            Ok(re) => re.is_match(value),
            Err(e) => {
                warn!("invalid regex pattern {pattern:?}: {e}");
                false
            }
        }
    }
}

/// Registry mapping condition operator names to matchers.
///
/// Open for extension: new matchers register by name without touching
/// dispatch. Unknown operator names fail closed so one misconfigured
/// rule cannot take down evaluation of the rest of the catalog.
pub struct MatcherRegistry {
    matchers: HashMap<String, Box<dyn Matcher>>,
}

impl MatcherRegistry {
    /// Registry with the built-in operators: `is_compound` and
    /// `regex_match`.
    pub fn builtin() -> Self {
        let mut registry = Self {
            matchers: HashMap::new(),
        };
        registry.register("is_compound", IsCompound);
        registry.register("regex_match", RegexMatch);
        registry
    }

    pub fn register(&mut self, name: &str, matcher: impl Matcher + 'static) {
        self.matchers.insert(name.to_string(), Box::new(matcher));
    }

    /// Apply the named operator to a value. Unknown operators are a
    /// non-match.
    pub fn matches(&self, operator: &str, value: &str, pattern: &str) -> bool {
        match self.matchers.get(operator) {
            Some(matcher) => matcher.matches(value, pattern),
            None => {
                warn!("unknown condition operator {operator:?}, treating as non-match");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_compound_matches_chain() {
        let registry = MatcherRegistry::builtin();
        assert!(registry.matches("is_compound", "ls && pwd", ""));
        assert!(!registry.matches("is_compound", "ls -la", ""));
    }

    #[test]
    fn is_compound_ignores_pattern() {
        let registry = MatcherRegistry::builtin();
        assert!(registry.matches("is_compound", "ls && pwd", "ignored"));
    }

    #[test]
    fn regex_match_searches_unanchored() {
        let registry = MatcherRegistry::builtin();
        assert!(registry.matches("regex_match", "ls && rm -rf /tmp", r"rm\s+-rf"));
        assert!(!registry.matches("regex_match", "ls -la", r"rm\s+-rf"));
    }

    #[test]
    fn invalid_regex_fails_closed() {
        let registry = MatcherRegistry::builtin();
        assert!(!registry.matches("regex_match", "anything", "("));
    }

    #[test]
    fn unknown_operator_fails_closed() {
        let registry = MatcherRegistry::builtin();
        assert!(!registry.matches("glob_match", "ls", "*"));
    }

    #[test]
    fn custom_matcher_registers() {
        struct Contains;
        impl Matcher for Contains {
            fn matches(&self, value: &str, pattern: &str) -> bool {
                value.contains(pattern)
            }
        }

        let mut registry = MatcherRegistry::builtin();
        registry.register("contains", Contains);
        assert!(registry.matches("contains", "git push", "push"));
        assert!(!registry.matches("contains", "git pull", "push"));
    }
}
