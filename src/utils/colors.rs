/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const BLUE: &str = "\x1b[34m";

/// Check-in time colour: red when late, green otherwise.
pub fn color_for_check_in(is_late: bool) -> &'static str {
    if is_late { RED } else { GREEN }
}

/// Duration colour: red for a short shift, green for a full one,
/// grey while the entry is still open.
pub fn color_for_duration(is_short: Option<bool>) -> &'static str {
    match is_short {
        Some(true) => RED,
        Some(false) => GREEN,
        None => GREY,
    }
}

/// Returns the value wrapped in GREY when it's a placeholder
/// (`--:--:--`, `0h 0m` or empty), untouched otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--:--" || value.trim() == "0h 0m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
