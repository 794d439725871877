use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::{EntryStatus, LogEntry};
use crate::utils::time::{TIMESTAMP_FMT, format_timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

fn parse_ts(idx: usize, raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(raw.to_string())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<LogEntry> {
    let check_in_raw: String = row.get("check_in")?;
    let check_out_raw: Option<String> = row.get("check_out")?;
    let status_raw: String = row.get("status")?;

    let status = EntryStatus::from_db_str(&status_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid status: {}", status_raw))),
        )
    })?;

    Ok(LogEntry {
        id: row.get("id")?,
        staff_id: row.get("staff_id")?,
        display_name: row.get("display_name")?,
        check_in_at: parse_ts(3, &check_in_raw)?,
        check_out_at: check_out_raw.as_deref().map(|s| parse_ts(4, s)).transpose()?,
        is_late: row.get::<_, i32>("is_late")? == 1,
        is_short_shift: row.get::<_, Option<i32>>("is_short_shift")?.map(|v| v == 1),
        worked_minutes: row.get("worked_minutes")?,
        status,
    })
}

/// Load the attendance log in chronological order, optionally filtered
/// by check-in date (inclusive bounds).
pub fn load_entries(
    pool: &DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<LogEntry>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = pool
                .conn
                .prepare("SELECT * FROM attendance_log ORDER BY check_in ASC, id ASC")?;
            for r in stmt.query_map([], map_row)? {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            // check_in is "YYYY-MM-DDTHH:MM:SS": compare on the date prefix
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM attendance_log
                 WHERE substr(check_in, 1, 10) BETWEEN ?1 AND ?2
                 ORDER BY check_in ASC, id ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Insert a new entry or replace the row with the same id.
pub fn upsert_entry(conn: &Connection, e: &LogEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO attendance_log
            (id, staff_id, display_name, check_in, check_out, is_late, is_short_shift, worked_minutes, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(id) DO UPDATE SET
            check_out      = excluded.check_out,
            is_short_shift = excluded.is_short_shift,
            worked_minutes = excluded.worked_minutes,
            status         = excluded.status",
        params![
            e.id,
            e.staff_id,
            e.display_name,
            format_timestamp(&e.check_in_at),
            e.check_out_at.as_ref().map(format_timestamp),
            if e.is_late { 1 } else { 0 },
            e.is_short_shift.map(|v| if v { 1 } else { 0 }),
            e.worked_minutes,
            e.status.to_db_str(),
        ],
    )?;
    Ok(())
}

/// Remove every attendance row. Returns the number of deleted rows.
pub fn clear_entries(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM attendance_log", [])?)
}

/// Rows of the internal `log` table, oldest first.
pub fn load_log(pool: &DbPool) -> Result<Vec<(i32, String, String, String, String)>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i32>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
