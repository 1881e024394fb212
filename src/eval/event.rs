use serde::Deserialize;
use serde_json::Value;

/// A tool-invocation event as delivered by the hook runtime.
///
/// Only the command text inside `tool_input` is ever interpreted; the
/// rest is carried through for event-kind matching and for echoing the
/// hook event name back into deny payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct HookEvent {
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_input: Value,
    pub hook_event_name: Option<String>,
}

impl HookEvent {
    /// Convenience constructor for a Bash command event.
    pub fn bash(command: &str) -> Self {
        Self {
            tool_name: Some("Bash".into()),
            tool_input: serde_json::json!({ "command": command }),
            hook_event_name: None,
        }
    }

    /// Resolve a dot-separated field path within `tool_input` to a
    /// string value. Missing fields and non-string values yield `None`
    /// so conditions referencing them fail closed.
    pub fn field(&self, path: &str) -> Option<&str> {
        let mut current = &self.tool_input;
        for part in path.split('.') {
            current = current.get(part)?;
        }
        current.as_str()
    }

    /// The command text, when this event carries one.
    pub fn command(&self) -> Option<&str> {
        self.field("command")
    }

    /// Case-insensitive event-kind check against the tool name. A rule
    /// event of `"*"` matches any tool.
    pub fn kind_matches(&self, event: &str) -> bool {
        if event == "*" {
            return true;
        }
        self.tool_name
            .as_deref()
            .is_some_and(|tool| tool.eq_ignore_ascii_case(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_hook_input() {
        let event: HookEvent = serde_json::from_value(json!({
            "tool_name": "Bash",
            "tool_input": { "command": "ls -la" },
            "hook_event_name": "PreToolUse"
        }))
        .unwrap();
        assert_eq!(event.command(), Some("ls -la"));
        assert_eq!(event.hook_event_name.as_deref(), Some("PreToolUse"));
    }

    #[test]
    fn missing_tool_input_defaults() {
        let event: HookEvent =
            serde_json::from_value(json!({ "tool_name": "Bash" })).unwrap();
        assert_eq!(event.command(), None);
    }

    #[test]
    fn nested_field_path() {
        let event: HookEvent = serde_json::from_value(json!({
            "tool_name": "Bash",
            "tool_input": { "meta": { "shell": "zsh" } }
        }))
        .unwrap();
        assert_eq!(event.field("meta.shell"), Some("zsh"));
        assert_eq!(event.field("meta.missing"), None);
    }

    #[test]
    fn non_string_field_is_none() {
        let event: HookEvent = serde_json::from_value(json!({
            "tool_name": "Bash",
            "tool_input": { "timeout": 120 }
        }))
        .unwrap();
        assert_eq!(event.field("timeout"), None);
    }

    #[test]
    fn kind_matches_case_insensitive() {
        let event = HookEvent::bash("ls");
        assert!(event.kind_matches("bash"));
        assert!(event.kind_matches("Bash"));
        assert!(!event.kind_matches("edit"));
    }

    #[test]
    fn kind_matches_wildcard() {
        let event = HookEvent::bash("ls");
        assert!(event.kind_matches("*"));
    }

    #[test]
    fn kind_without_tool_name_only_matches_wildcard() {
        let event: HookEvent = serde_json::from_value(json!({})).unwrap();
        assert!(!event.kind_matches("bash"));
        assert!(event.kind_matches("*"));
    }
}
