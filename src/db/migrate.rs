use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema change, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260902_0001_create_attendance_log",
        description: "Created attendance_log table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS attendance_log (
            id             INTEGER PRIMARY KEY,
            staff_id       TEXT NOT NULL,
            display_name   TEXT NOT NULL,
            check_in       TEXT NOT NULL,
            check_out      TEXT,
            is_late        INTEGER NOT NULL DEFAULT 0,
            is_short_shift INTEGER,
            worked_minutes INTEGER,
            status         TEXT NOT NULL CHECK(status IN ('WORKING','DONE'))
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_staff ON attendance_log(staff_id, status);
        CREATE INDEX IF NOT EXISTS idx_attendance_check_in ON attendance_log(check_in);
        "#,
    },
    Migration {
        version: "20260902_0002_create_kv_store",
        description: "Created kv table for the session snapshot",
        sql: r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    conn.execute_batch(m.sql)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}

/// Number of schema migrations recorded as applied.
pub fn applied_count(conn: &Connection) -> Result<usize> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
        [],
        |row| row.get(0),
    )?;
    Ok(n as usize)
}
