use serde_json::{Value, json};

/// Hook event name used in deny payloads when the input omitted one.
const DEFAULT_HOOK_EVENT: &str = "PreToolUse";

/// Outcome of evaluating a rule catalog against one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// No rule matched: no message, no permission opinion.
    Pass,
    /// A warn rule matched: non-blocking advisory message.
    Warn { message: String },
    /// A block rule matched: advisory message plus an explicit deny
    /// directive echoing the originating hook event name.
    Block {
        message: String,
        hook_event: Option<String>,
    },
}

impl Decision {
    pub fn is_pass(&self) -> bool {
        matches!(self, Decision::Pass)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Decision::Pass => None,
            Decision::Warn { message } | Decision::Block { message, .. } => Some(message),
        }
    }

    /// Short action label for audit logging.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Pass => "pass",
            Decision::Warn { .. } => "warn",
            Decision::Block { .. } => "block",
        }
    }

    /// Render the hook-protocol JSON payload.
    ///
    /// Pass serializes to an empty object so the runtime treats the
    /// call as a no-op. Block always carries the deny directive, even
    /// when the input had no hook event name to echo.
    pub fn to_output(&self) -> Value {
        match self {
            Decision::Pass => json!({}),
            Decision::Warn { message } => json!({ "systemMessage": message }),
            Decision::Block {
                message,
                hook_event,
            } => json!({
                "systemMessage": message,
                "hookSpecificOutput": {
                    "hookEventName": hook_event.as_deref().unwrap_or(DEFAULT_HOOK_EVENT),
                    "permissionDecision": "deny",
                    "permissionDecisionReason": message,
                }
            }),
        }
    }
}
