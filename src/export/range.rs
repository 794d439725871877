// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse a period filter into inclusive date bounds.
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - start:end, both sides in the same format
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "start and end must have same format: {r}"
            )));
        }

        let (from, _) = period_bounds(start)?;
        let (_, to) = period_bounds(end)?;

        if from > to {
            return Err(AppError::InvalidDate(format!("range ends before it starts: {r}")));
        }
        return Ok((from, to));
    }

    period_bounds(r)
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD value.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((first, month_last_day(first).ok_or_else(invalid)?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(format!("unsupported range format: {p}"))),
    }
}

fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_bounds_handle_february_and_december() {
        assert_eq!(parse_range("2026-02").unwrap(), (d(2026, 2, 1), d(2026, 2, 28)));
        assert_eq!(parse_range("2028-02").unwrap(), (d(2028, 2, 1), d(2028, 2, 29)));
        assert_eq!(parse_range("2026-12").unwrap(), (d(2026, 12, 1), d(2026, 12, 31)));
    }

    #[test]
    fn ranges_span_whole_periods() {
        assert_eq!(
            parse_range("2026-09:2026-10").unwrap(),
            (d(2026, 9, 1), d(2026, 10, 31))
        );
        assert_eq!(parse_range("2026").unwrap(), (d(2026, 1, 1), d(2026, 12, 31)));
        assert!(parse_range("2026-10-14:2026-10-01").is_err());
        assert!(parse_range("14/10/2026").is_err());
    }
}
