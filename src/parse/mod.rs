//! Shell command scanning and classification.
//!
//! `scanner` performs operator-level segmentation with quote tracking;
//! `classify` builds compound detection, base-command extraction, and
//! breakdown rendering on top of it. Deliberately not a shell parser:
//! no expansion, no subshells, no redirection analysis.

pub mod classify;
pub mod scanner;
pub mod types;

pub use classify::{extract_base_commands, format_breakdown, is_compound};
pub use scanner::scan;
pub use types::{Operator, Segment};
