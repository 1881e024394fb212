//! rulegate: a PreToolUse hook for Claude Code that gates Bash commands
//! with declarative rules.
//!
//! Commands are scanned into operator-separated segments (quote-aware,
//! no full shell grammar), classified, and matched against an ordered
//! rule catalog. The first matching rule produces either an advisory
//! message (`warn`) or a deny directive (`block`) for the hook runtime;
//! no match produces an empty payload.
//!
//! # Architecture
//!
//! - **[`parse`]** — Command scanner (operator segmentation with quote
//!   tracking) and classifier (compound detection, base-command
//!   extraction, breakdown rendering).
//! - **[`eval`]** — Rule engine: matcher registry, message template
//!   expansion, decision types, hook event model.
//! - **[`config`]** — Rule catalog: TOML types, embedded defaults, user
//!   overlay merge, load-time validation.
//! - **[`logging`]** — Application log and decision audit trail.

/// Rule catalog types, loading, and overlay merge logic.
pub mod config;
/// Evaluation engine: matchers, templates, decisions, events.
pub mod eval;
/// File-based application and decision logging.
pub mod logging;
/// Shell command scanning and classification.
pub mod parse;

use eval::{Decision, HookEvent, RuleEngine};

/// Evaluate one event against the embedded default rule catalog.
///
/// This is the main entry point for tests and simple usage. For user
/// catalogs or custom matchers, build a [`RuleEngine`] and a
/// [`config::RuleSet`] directly.
pub fn evaluate(event: &HookEvent) -> Decision {
    let rules = config::RuleSet::default_rules();
    let engine = RuleEngine::new();
    engine.evaluate(&rules.rules, event)
}
