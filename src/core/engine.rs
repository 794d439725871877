//! Attendance engine: the check-in / check-out state machine.
//!
//! The engine owns the open sessions and the attendance log. It performs no
//! I/O; callers persist and render the [`LogEntry`] values it returns.

use crate::core::directory::Directory;
use crate::core::policy::AttendancePolicy;
use crate::core::session_store::{SessionSnapshot, SessionStore};
use crate::errors::AttendanceError;
use crate::models::employee::{Employee, normalize_id};
use crate::models::log_entry::{EntryStatus, LogEntry};
use crate::utils::formatting::worked_minutes;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

/// What a reset wiped out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetSummary {
    pub sessions_cleared: usize,
    pub entries_cleared: usize,
}

/// Normalize the raw kiosk input and look it up in the directory.
pub fn resolve_identity(directory: &Directory, raw: &str) -> Result<Employee, AttendanceError> {
    let id = normalize_id(raw);
    if id.is_empty() {
        return Err(AttendanceError::EmptyInput);
    }

    directory
        .lookup(&id)
        .cloned()
        .ok_or(AttendanceError::UnknownStaffId(id))
}

#[derive(Debug, Clone)]
pub struct AttendanceEngine {
    policy: AttendancePolicy,
    sessions: SessionStore,
    log: Vec<LogEntry>,
    next_id: i64,
}

impl AttendanceEngine {
    pub fn new(policy: AttendancePolicy) -> Self {
        Self {
            policy,
            sessions: SessionStore::new(),
            log: Vec::new(),
            next_id: 1,
        }
    }

    /// Resume with a previously recorded log (chronological order).
    pub fn with_log(policy: AttendancePolicy, log: Vec<LogEntry>) -> Self {
        let next_id = log.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            policy,
            sessions: SessionStore::new(),
            log,
            next_id,
        }
    }

    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.sessions.snapshot()
    }

    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        self.sessions.restore(snapshot);
    }

    pub fn check_in(
        &mut self,
        employee: &Employee,
        now: NaiveDateTime,
    ) -> Result<LogEntry, AttendanceError> {
        self.sessions.open(&employee.id, now)?;

        let entry = LogEntry {
            id: self.take_id(),
            staff_id: employee.id.clone(),
            display_name: employee.name.clone(),
            check_in_at: now,
            check_out_at: None,
            is_late: self.policy.is_late(now),
            is_short_shift: None,
            worked_minutes: None,
            status: EntryStatus::Working,
        };

        self.log.push(entry.clone());
        Ok(entry)
    }

    pub fn check_out(
        &mut self,
        employee: &Employee,
        now: NaiveDateTime,
    ) -> Result<LogEntry, AttendanceError> {
        let started = self.sessions.close(&employee.id)?;

        let elapsed = now - started;
        let is_short = self.policy.is_short_shift(elapsed);

        let idx = match self.open_entry_index(&employee.id) {
            Some(i) => i,
            None => {
                // session came from a snapshot, its log row was lost
                let entry = LogEntry {
                    id: self.take_id(),
                    staff_id: employee.id.clone(),
                    display_name: employee.name.clone(),
                    check_in_at: started,
                    check_out_at: None,
                    is_late: self.policy.is_late(started),
                    is_short_shift: None,
                    worked_minutes: None,
                    status: EntryStatus::Working,
                };
                self.log.push(entry);
                self.log.len() - 1
            }
        };

        let entry = &mut self.log[idx];
        entry.check_out_at = Some(now);
        entry.is_short_shift = Some(is_short);
        entry.worked_minutes = Some(worked_minutes(elapsed));
        entry.status = EntryStatus::Done;

        Ok(entry.clone())
    }

    /// Settle log rows left `Working` by a run whose session was lost.
    ///
    /// A working row stays open only when it is the newest one for its staff
    /// id and starts exactly at that id's open session. Every other working
    /// row becomes `Done` with no check-out time. Returns the changed rows,
    /// oldest first.
    pub fn close_orphans(&mut self) -> Vec<LogEntry> {
        let mut kept = BTreeSet::new();
        let mut closed = Vec::new();

        for entry in self.log.iter_mut().rev().filter(|e| e.is_working()) {
            let live = self.sessions.check_in_at(&entry.staff_id) == Some(entry.check_in_at);
            if live && kept.insert(entry.staff_id.clone()) {
                continue;
            }
            entry.status = EntryStatus::Done;
            closed.push(entry.clone());
        }

        closed.reverse();
        closed
    }

    /// Clear every open session and the whole log.
    pub fn reset(&mut self) -> ResetSummary {
        let summary = ResetSummary {
            sessions_cleared: self.sessions.clear(),
            entries_cleared: self.log.len(),
        };
        self.log.clear();
        self.next_id = 1;
        summary
    }

    fn open_entry_index(&self, staff_id: &str) -> Option<usize> {
        self.log
            .iter()
            .rposition(|e| e.staff_id == staff_id && e.is_working())
    }

    fn take_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
