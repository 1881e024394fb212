//! Compound-command classification built on the scanner.

use super::scanner::scan;

/// Commands that wrap and execute another command. Base-command
/// extraction names the wrapped command instead of the wrapper.
const WRAPPERS: &[&str] = &["sudo", "env", "time"];

/// True when the command splits into more than one segment.
///
/// A single segment is never compound, even when a trailing operator
/// was present but produced no second segment.
pub fn is_compound(command: &str) -> bool {
    scan(command).len() > 1
}

/// Render a numbered, human-readable breakdown of a compound command.
///
/// Zero or one segments render as ``Single command: `<command>` `` with
/// the original untrimmed input. Otherwise each segment gets one line,
/// 1-indexed, labeled with its operator's description. Lines are joined
/// with `\n`, no trailing newline.
pub fn format_breakdown(command: &str) -> String {
    let segments = scan(command);
    if segments.len() <= 1 {
        return format!("Single command: `{command}`");
    }

    let lines: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(idx, seg)| {
            let i = idx + 1;
            match seg.operator {
                Some(op) => format!("{i}. {}: `{}`", op.description(), seg.text),
                None => format!("{i}. First: `{}`", seg.text),
            }
        })
        .collect();

    lines.join("\n")
}

/// Extract the base command name of every segment, in source order.
///
/// The base command is the first whitespace-delimited token; wrapper
/// commands are unwrapped to the command they run, and a bare wrapper
/// with no argument names the wrapper itself. Duplicates are kept.
pub fn extract_base_commands(command: &str) -> Vec<String> {
    scan(command)
        .iter()
        .filter_map(|seg| {
            let mut words = seg.text.split_whitespace();
            let first = words.next()?;
            if WRAPPERS.contains(&first) {
                Some(words.next().unwrap_or(first).to_string())
            } else {
                Some(first.to_string())
            }
        })
        .collect()
}
