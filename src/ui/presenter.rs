//! Terminal presentation of kiosk outcomes.
//!
//! Besides printing, the presenter keeps the `attendance_log` table in sync
//! with the engine's log and records every action in the internal log.

use crate::core::{Presenter, ResetSummary};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_entries, upsert_entry};
use crate::errors::{AppError, AttendanceError};
use crate::models::log_entry::LogEntry;
use crate::ui::messages::{badge, error, success, warning};
use crate::utils::colors::RED;
use crate::utils::formatting::clock;

pub struct TerminalPresenter<'a> {
    pool: Option<&'a DbPool>,
    echo_rejections: bool,
    degraded: bool,
}

impl<'a> TerminalPresenter<'a> {
    pub fn new(pool: Option<&'a DbPool>) -> Self {
        Self {
            pool,
            echo_rejections: true,
            degraded: false,
        }
    }

    /// One-shot commands report rejections through their exit status instead.
    pub fn quiet_rejections(mut self) -> Self {
        self.echo_rejections = false;
        self
    }

    fn store(&self, entry: &LogEntry) {
        if let Some(pool) = self.pool
            && let Err(e) = upsert_entry(&pool.conn, entry)
        {
            warning(format!("Failed to record attendance row: {}", e));
        }
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Some(pool) = self.pool {
            ttlog_quiet(&pool.conn, operation, target, message);
        }
    }
}

impl Presenter for TerminalPresenter<'_> {
    fn on_check_in_accepted(&mut self, entry: &LogEntry) {
        self.store(entry);

        let late = if entry.is_late { " (late)" } else { "" };
        self.audit(
            "check_in",
            &entry.staff_id,
            &format!("{} checked in at {}{}", entry.display_name, entry.check_in_at, late),
        );

        success(format!(
            "{} ({}) checked in at {}",
            entry.display_name,
            entry.staff_id,
            clock(&entry.check_in_at)
        ));
        if entry.is_late {
            badge(RED, "⏰ LATE ARRIVAL");
        }
    }

    fn on_check_out_accepted(&mut self, entry: &LogEntry) {
        self.store(entry);

        let worked = entry.worked_display();
        let short = entry.is_short_shift == Some(true);
        self.audit(
            "check_out",
            &entry.staff_id,
            &format!(
                "{} checked out, worked {}{}",
                entry.display_name,
                worked,
                if short { " (short shift)" } else { "" }
            ),
        );

        let out = entry
            .check_out_at
            .as_ref()
            .map(clock)
            .unwrap_or_default();
        success(format!(
            "{} ({}) checked out at {}, worked {}",
            entry.display_name, entry.staff_id, out, worked
        ));
        if short {
            badge(RED, "⏱  SHORT SHIFT");
        }
    }

    fn on_rejected(&mut self, err: &AttendanceError) {
        self.audit("rejected", err.kind(), &err.to_string());
        if self.echo_rejections {
            error(err);
        }
    }

    fn on_reset(&mut self, summary: &ResetSummary) {
        if let Some(pool) = self.pool
            && let Err(e) = clear_entries(&pool.conn)
        {
            warning(format!("Failed to clear attendance table: {}", e));
        }

        self.audit(
            "reset",
            "",
            &format!(
                "Cleared {} open session(s) and {} log row(s)",
                summary.sessions_cleared, summary.entries_cleared
            ),
        );
        warning(format!(
            "System reset: {} open session(s) and {} log row(s) cleared",
            summary.sessions_cleared, summary.entries_cleared
        ));
    }

    fn on_storage_degraded(&mut self, err: &AppError) {
        if !self.degraded {
            warning(format!(
                "Session storage unavailable, continuing in memory only: {}",
                err
            ));
            self.degraded = true;
        }
    }
}
