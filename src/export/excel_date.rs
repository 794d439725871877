// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Number format applied to timestamp cells.
pub(crate) const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Excel serial for an exported `YYYY-MM-DD HH:MM:SS` cell: days since
/// 1899-12-30, with the time of day as the fraction.
pub(crate) fn excel_serial(cell: &str) -> Option<f64> {
    let ts = NaiveDateTime::parse_from_str(cell, "%Y-%m-%d %H:%M:%S").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    Some((ts - epoch).num_seconds() as f64 / 86_400.0)
}
