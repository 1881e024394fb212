//! Message template expansion for matched rules.

use std::collections::HashMap;

use crate::parse;

/// Renders one placeholder from the event's command text.
type Renderer = fn(&str) -> String;

fn base_commands_list(command: &str) -> String {
    parse::extract_base_commands(command)
        .iter()
        .map(|name| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Registry of `{{NAME}}` placeholders recognized in rule messages.
///
/// Expansion is a single textual pass: substituted content is never
/// rescanned, and unknown tokens are left verbatim for forward
/// compatibility with placeholders this engine does not know.
pub struct TemplateRegistry {
    renderers: HashMap<&'static str, Renderer>,
}

impl TemplateRegistry {
    /// Registry with the built-in placeholders `COMMAND_BREAKDOWN` and
    /// `BASE_COMMANDS`.
    pub fn builtin() -> Self {
        let mut renderers: HashMap<&'static str, Renderer> = HashMap::new();
        renderers.insert("COMMAND_BREAKDOWN", parse::format_breakdown);
        renderers.insert("BASE_COMMANDS", base_commands_list);
        Self { renderers }
    }

    /// Expand placeholders in a message template.
    pub fn expand(&self, template: &str, command: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) if self.renderers.contains_key(&after[..end]) => {
                    let render = self.renderers[&after[..end]];
                    out.push_str(&render(command));
                    rest = &after[end + 2..];
                }
                // Unknown or unterminated token: keep the braces and
                // rescan after them so a following token still resolves
                _ => {
                    out.push_str("{{");
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}
