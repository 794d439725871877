//! Time utilities: parsing HH:MM, kiosk timestamps, work durations.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, Local, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

/// ISO-8601 layout used for persisted timestamps (snapshot, attendance_log).
pub const TIMESTAMP_FMT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let n = Local::now().naive_local();
    n.with_nanosecond(0).unwrap_or(n)
}

/// Parse a timestamp given on the command line (`--at`).
///
/// Accepted: `YYYY-MM-DD HH:MM`, `YYYY-MM-DD HH:MM:SS` and the `T`-separated
/// ISO forms.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    let s = s.trim();
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    input.map(|s| parse_timestamp(s)).transpose()
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FMT).to_string()
}

/// Parse a work duration such as `8h30m`, `8h 30m`, `9h`, `45m` or `08:30`.
pub fn parse_work_duration(s: &str) -> AppResult<Duration> {
    let raw = s.trim().to_lowercase();

    if let Some(t) = parse_time(&raw) {
        return Ok(Duration::minutes((t.hour() * 60 + t.minute()) as i64));
    }

    let re = Regex::new(r"^(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?$")
        .map_err(|e| AppError::Other(e.to_string()))?;

    let caps = re
        .captures(&raw)
        .filter(|c| c.get(1).is_some() || c.get(2).is_some())
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))?;

    let part = |i: usize| -> AppResult<i64> {
        caps.get(i)
            .map(|m| m.as_str().parse::<i64>())
            .transpose()
            .map(|v| v.unwrap_or(0))
            .map_err(|_| AppError::InvalidDuration(s.to_string()))
    };

    let hours = part(1)?;
    let minutes = part(2)?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .and_then(Duration::try_minutes)
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))
}
