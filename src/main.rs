//! rulegate: PreToolUse hook for Claude Code.
//!
//! Reads a hook event as JSON from stdin, evaluates the rule catalog,
//! and writes a decision payload to stdout:
//!   - no rule matched   -> {}
//!   - warn rule matched -> {"systemMessage": ...}
//!   - block rule matched -> systemMessage plus a hookSpecificOutput
//!     deny directive
//!
//! Flags:
//!   --dump-rules     print the merged rule catalog as TOML and exit
//!   --explain CMD    print the compound-command breakdown for CMD
//!   --rules PATH     evaluate against an explicit catalog file

use std::io::Read;

use rulegate::config::RuleSet;
use rulegate::eval::{HookEvent, RuleEngine};
use rulegate::{logging, parse};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut rules_path: Option<String> = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dump-rules" => {
                let set = RuleSet::load();
                match toml::to_string_pretty(&set) {
                    Ok(dump) => print!("{dump}"),
                    Err(e) => {
                        eprintln!("rulegate: {e}");
                        std::process::exit(1);
                    }
                }
                return;
            }
            "--explain" => {
                let Some(command) = iter.next() else {
                    eprintln!("rulegate: --explain requires a command argument");
                    std::process::exit(2);
                };
                println!("{}", parse::format_breakdown(command));
                return;
            }
            "--rules" => {
                let Some(path) = iter.next() else {
                    eprintln!("rulegate: --rules requires a path argument");
                    std::process::exit(2);
                };
                rules_path = Some(path.clone());
            }
            other => {
                eprintln!("rulegate: unknown argument {other:?}");
                std::process::exit(2);
            }
        }
    }

    let rules = match rules_path {
        Some(path) => {
            let expanded = shellexpand::tilde(&path).into_owned();
            match RuleSet::load_from_path(std::path::Path::new(&expanded)) {
                Ok(set) => set,
                Err(e) => {
                    eprintln!("rulegate: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => RuleSet::load(),
    };

    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        eprintln!("rulegate: failed to read stdin");
        std::process::exit(1);
    }

    let event: HookEvent = match serde_json::from_str(&input) {
        Ok(event) => event,
        Err(e) => {
            eprintln!("rulegate: JSON parse error: {e}");
            std::process::exit(1);
        }
    };

    let engine = RuleEngine::new();
    let decision = engine.evaluate(&rules.rules, &event);

    logging::log_decision(event.command().unwrap_or_default(), &decision);

    println!("{}", decision.to_output());
}
