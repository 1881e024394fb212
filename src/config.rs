use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Embedded default rule catalog.
const DEFAULT_RULES: &str = include_str!("../rules.default.toml");

/// Operator names with a built-in matcher. Used only to flag likely
/// typos at load time; unknown names still load, since callers may
/// register custom matchers on the engine.
const BUILTIN_OPERATORS: &[&str] = &["is_compound", "regex_match"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse rules file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One declarative condition: a field of the event, an operator name,
/// and an operator-specific pattern.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Condition {
    /// Dot-separated path into the event's tool input, e.g. "command".
    pub field: String,
    /// Matcher name: "is_compound", "regex_match", or a custom operator.
    pub operator: String,
    /// Matcher-specific pattern; empty for `is_compound`, a regular
    /// expression for `regex_match`.
    #[serde(default)]
    pub pattern: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Warn,
    Block,
}

/// A named policy: all conditions must hold for the action to fire.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Rule {
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Tool kind this rule applies to, e.g. "bash". "*" matches any.
    pub event: String,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    pub action: Action,
    /// Message template; `{{COMMAND_BREAKDOWN}}` and `{{BASE_COMMANDS}}`
    /// are expanded when the rule fires.
    pub message: String,
}

fn default_enabled() -> bool {
    true
}

/// An ordered rule catalog.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Names of rules to drop during merge. Lets a user overlay switch
    /// off individual default rules without replacing the catalog.
    #[serde(default, skip_serializing)]
    pub disable: Vec<String>,
}

impl RuleSet {
    /// The embedded default catalog.
    pub fn default_rules() -> Self {
        let mut set: RuleSet =
            toml::from_str(DEFAULT_RULES).expect("embedded default rules must parse");
        set.validate();
        set
    }

    /// Load the catalog: embedded defaults with a user overlay merged in.
    ///
    /// The overlay path is `$RULEGATE_RULES` (tilde-expanded) when set,
    /// otherwise `~/.config/rulegate/rules.toml`. Overlay rules are
    /// prepended so they take priority over defaults, and the overlay's
    /// `disable` list removes default rules by name. A missing overlay
    /// file is fine; a broken one is logged and skipped so the hook
    /// always has a catalog to run.
    pub fn load() -> Self {
        let mut set = Self::default_rules();
        if let Some(path) = Self::overlay_path() {
            match Self::load_from_path(&path) {
                Ok(overlay) => set.merge_overlay(overlay),
                Err(ConfigError::Io(_)) => {}
                Err(e) => warn!("ignoring user rules: {e}"),
            }
        }
        set
    }

    fn overlay_path() -> Option<std::path::PathBuf> {
        if let Ok(path) = std::env::var("RULEGATE_RULES") {
            return Some(shellexpand::tilde(&path).into_owned().into());
        }
        let home = std::env::var_os("HOME")?;
        Some(std::path::Path::new(&home).join(".config/rulegate/rules.toml"))
    }

    /// Load and validate a catalog from an explicit path.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut set: RuleSet = toml::from_str(&content)?;
        set.validate();
        Ok(set)
    }

    /// Prepend overlay rules and apply its disable list.
    fn merge_overlay(&mut self, overlay: RuleSet) {
        self.rules
            .retain(|rule| !overlay.disable.contains(&rule.name));
        let mut merged = overlay.rules;
        merged.append(&mut self.rules);
        self.rules = merged;
        // Re-validate so an overlay rule reusing a default rule's name
        // shadows it instead of duplicating it
        self.validate();
    }

    /// Drop rules the engine could never evaluate soundly: empty or
    /// duplicate names, and `regex_match` conditions whose pattern does
    /// not compile. Unknown operator names are kept but warned about.
    fn validate(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.rules.retain(|rule| {
            if rule.name.is_empty() {
                warn!("dropping rule with empty name");
                return false;
            }
            if !seen.insert(rule.name.clone()) {
                warn!("dropping duplicate rule {:?}", rule.name);
                return false;
            }
            for cond in &rule.conditions {
                if cond.operator == "regex_match"
                    && let Err(e) = Regex::new(&cond.pattern)
                {
                    warn!(
                        "dropping rule {:?}: invalid pattern {:?}: {e}",
                        rule.name, cond.pattern
                    );
                    return false;
                }
                if !BUILTIN_OPERATORS.contains(&cond.operator.as_str()) {
                    warn!(
                        "rule {:?} uses operator {:?} with no built-in matcher",
                        rule.name, cond.operator
                    );
                }
            }
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> RuleSet {
        let mut set: RuleSet = toml::from_str(toml_str).unwrap();
        set.validate();
        set
    }

    #[test]
    fn default_rules_parse() {
        let set = RuleSet::default_rules();
        assert!(!set.rules.is_empty());
    }

    #[test]
    fn default_rules_block_before_warn() {
        // The dangerous-compound block must shadow the generic warning
        let set = RuleSet::default_rules();
        let block = set
            .rules
            .iter()
            .position(|r| r.action == Action::Block)
            .unwrap();
        let warn = set
            .rules
            .iter()
            .position(|r| r.name == "warn-compound-command")
            .unwrap();
        assert!(block < warn);
    }

    #[test]
    fn enabled_defaults_to_true() {
        let set = parse(
            r#"
            [[rules]]
            name = "r"
            event = "bash"
            action = "warn"
            message = "m"
        "#,
        );
        assert!(set.rules[0].enabled);
        assert!(set.rules[0].conditions.is_empty());
    }

    #[test]
    fn pattern_defaults_to_empty() {
        let set = parse(
            r#"
            [[rules]]
            name = "r"
            event = "bash"
            action = "warn"
            message = "m"
            [[rules.conditions]]
            field = "command"
            operator = "is_compound"
        "#,
        );
        assert_eq!(set.rules[0].conditions[0].pattern, "");
    }

    #[test]
    fn invalid_regex_rule_dropped() {
        let set = parse(
            r#"
            [[rules]]
            name = "bad"
            event = "bash"
            action = "warn"
            message = "m"
            [[rules.conditions]]
            field = "command"
            operator = "regex_match"
            pattern = "("

            [[rules]]
            name = "good"
            event = "bash"
            action = "warn"
            message = "m"
        "#,
        );
        assert_eq!(set.rules.len(), 1);
        assert_eq!(set.rules[0].name, "good");
    }

    #[test]
    fn duplicate_rule_dropped() {
        let set = parse(
            r#"
            [[rules]]
            name = "dup"
            event = "bash"
            action = "warn"
            message = "first"

            [[rules]]
            name = "dup"
            event = "bash"
            action = "block"
            message = "second"
        "#,
        );
        assert_eq!(set.rules.len(), 1);
        assert_eq!(set.rules[0].message, "first");
    }

    #[test]
    fn empty_name_dropped() {
        let set = parse(
            r#"
            [[rules]]
            name = ""
            event = "bash"
            action = "warn"
            message = "m"
        "#,
        );
        assert!(set.rules.is_empty());
    }

    #[test]
    fn unknown_operator_kept() {
        let set = parse(
            r#"
            [[rules]]
            name = "custom"
            event = "bash"
            action = "warn"
            message = "m"
            [[rules.conditions]]
            field = "command"
            operator = "starts_with"
            pattern = "git"
        "#,
        );
        assert_eq!(set.rules.len(), 1);
    }

    #[test]
    fn overlay_prepends_and_disables() {
        let mut set = RuleSet::default_rules();
        let default_len = set.rules.len();
        let overlay = parse(
            r#"
            disable = ["warn-compound-command"]

            [[rules]]
            name = "my-rule"
            event = "bash"
            action = "warn"
            message = "m"
        "#,
        );
        set.merge_overlay(overlay);
        assert_eq!(set.rules[0].name, "my-rule");
        assert!(!set.rules.iter().any(|r| r.name == "warn-compound-command"));
        assert_eq!(set.rules.len(), default_len);
    }

    #[test]
    fn overlay_rule_shadows_default_by_name() {
        let mut set = RuleSet::default_rules();
        let overlay = parse(
            r#"
            [[rules]]
            name = "warn-compound-command"
            event = "bash"
            action = "block"
            message = "stricter"
        "#,
        );
        set.merge_overlay(overlay);
        let shadowing: Vec<_> = set
            .rules
            .iter()
            .filter(|r| r.name == "warn-compound-command")
            .collect();
        assert_eq!(shadowing.len(), 1);
        assert_eq!(shadowing[0].message, "stricter");
    }

    #[test]
    fn catalog_round_trips_through_toml() {
        let set = RuleSet::default_rules();
        let dumped = toml::to_string_pretty(&set).unwrap();
        let reparsed: RuleSet = toml::from_str(&dumped).unwrap();
        assert_eq!(reparsed.rules.len(), set.rules.len());
    }
}
