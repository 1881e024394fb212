//! Rule evaluation: condition matching, template expansion, decisions.

pub mod decision;
pub mod event;
pub mod matchers;
pub mod template;

pub use decision::Decision;
pub use event::HookEvent;
pub use matchers::{Matcher, MatcherRegistry};
pub use template::TemplateRegistry;

use log::debug;

use crate::config::{Action, Condition, Rule};

/// First-match rule evaluator.
///
/// Holds the matcher and placeholder registries. The rule catalog and
/// event are read-only inputs to every call, so a single engine can
/// serve any number of independent evaluations.
pub struct RuleEngine {
    matchers: MatcherRegistry,
    templates: TemplateRegistry,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Engine with the built-in matchers and placeholders.
    pub fn new() -> Self {
        Self {
            matchers: MatcherRegistry::builtin(),
            templates: TemplateRegistry::builtin(),
        }
    }

    /// Register a custom condition matcher under the given operator name.
    pub fn register_matcher(&mut self, name: &str, matcher: impl Matcher + 'static) {
        self.matchers.register(name, matcher);
    }

    /// Evaluate rules in order against one event.
    ///
    /// A rule applies when it is enabled, its event kind matches the
    /// tool, and every condition holds (evaluated in list order). The
    /// first applicable rule wins; later rules are not evaluated. No
    /// match is a [`Decision::Pass`], never an error.
    pub fn evaluate(&self, rules: &[Rule], event: &HookEvent) -> Decision {
        for rule in rules {
            if !rule.enabled || !event.kind_matches(&rule.event) {
                continue;
            }
            if !rule
                .conditions
                .iter()
                .all(|cond| self.condition_matches(cond, event))
            {
                continue;
            }

            debug!("rule {:?} matched ({:?})", rule.name, rule.action);
            let command = event.command().unwrap_or_default();
            let message = self.templates.expand(&rule.message, command);
            return match rule.action {
                Action::Warn => Decision::Warn { message },
                Action::Block => Decision::Block {
                    message,
                    hook_event: event.hook_event_name.clone(),
                },
            };
        }

        Decision::Pass
    }

    /// A condition with an unresolvable field or unknown operator fails
    /// closed as a non-match.
    fn condition_matches(&self, condition: &Condition, event: &HookEvent) -> bool {
        let Some(value) = event.field(&condition.field) else {
            return false;
        };
        self.matchers
            .matches(&condition.operator, value, &condition.pattern)
    }
}
