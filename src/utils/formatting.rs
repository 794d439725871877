//! Formatting utilities used for CLI and export outputs.

use chrono::{Duration, NaiveDateTime};
use unicode_width::UnicodeWidthStr;

/// Pad to a display width (not byte length), so names with accents or
/// wide characters keep the table aligned.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Worked time as whole hours and whole remaining minutes, floored.
///
/// Negative durations render as `0h 0m`.
pub fn format_worked(d: Duration) -> String {
    let mins = d.num_minutes().max(0);
    format!("{}h {}m", mins / 60, mins % 60)
}

pub fn worked_minutes(d: Duration) -> i64 {
    d.num_minutes().max(0)
}

/// Clock time as shown on the kiosk (`08:44:59 AM`).
pub fn clock(ts: &NaiveDateTime) -> String {
    ts.format("%I:%M:%S %p").to_string()
}

/// Date and clock time, used in the log table.
pub fn date_clock(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn placeholder_time() -> &'static str {
    "--:--:--"
}
