//! Hook logging: application log via simplelog, decision audit trail.

use std::io::Write;

use crate::eval::Decision;

/// Initialize the application logger, appending to
/// `~/.local/share/rulegate/rulegate.log`. The level comes from the
/// `RULEGATE_LOG` env var (default: warn). Best-effort: the hook runs
/// fine without a logger, so failures are ignored.
pub fn init() {
    let Some(dir) = data_dir() else {
        return;
    };
    let _ = std::fs::create_dir_all(&dir);
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("rulegate.log"))
    else {
        return;
    };

    let level = match std::env::var("RULEGATE_LOG").as_deref() {
        Ok("off") => log::LevelFilter::Off,
        Ok("error") => log::LevelFilter::Error,
        Ok("info") => log::LevelFilter::Info,
        Ok("debug") => log::LevelFilter::Debug,
        Ok("trace") => log::LevelFilter::Trace,
        _ => log::LevelFilter::Warn,
    };

    let _ = simplelog::WriteLogger::init(level, simplelog::Config::default(), file);
}

/// Append a decision record to `~/.local/share/rulegate/decisions.log`.
/// Pass decisions are not recorded. Failures are silently ignored —
/// logging must never block the hook.
pub fn log_decision(command: &str, decision: &Decision) {
    if decision.is_pass() {
        return;
    }
    let Some(dir) = data_dir() else {
        return;
    };
    let _ = std::fs::create_dir_all(&dir);
    let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("decisions.log"))
    else {
        return;
    };

    // Compact single-line message for the log
    let message_oneline = decision.message().unwrap_or_default().replace('\n', "; ");
    let cmd_truncated: String = command.chars().take(200).collect();
    let ts = timestamp_now();

    let _ = writeln!(
        file,
        "{ts}\t{action}\t{cmd_truncated}\t{message_oneline}",
        action = decision.label(),
    );
}

fn data_dir() -> Option<std::path::PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(std::path::Path::new(&home).join(".local/share/rulegate"))
}

/// Simple UTC timestamp without external deps.
fn timestamp_now() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let days = secs / 86400;
    let rem = secs % 86400;
    let h = rem / 3600;
    let m = (rem % 3600) / 60;
    let s = rem % 60;
    let (year, month, day) = epoch_days_to_date(days);
    format!("{year:04}-{month:02}-{day:02}T{h:02}:{m:02}:{s:02}Z")
}

/// Convert days since Unix epoch to (year, month, day).
fn epoch_days_to_date(days: u64) -> (u64, u64, u64) {
    // Civil calendar from days algorithm (Howard Hinnant)
    let z = days + 719468;
    let era = z / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}
