use crate::utils::formatting::format_worked;
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryStatus {
    Working,
    Done,
}

impl EntryStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryStatus::Working => "WORKING",
            EntryStatus::Done => "DONE",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "WORKING" => Some(EntryStatus::Working),
            "DONE" => Some(EntryStatus::Done),
            _ => None,
        }
    }
}

/// One row of the visible attendance log.
///
/// Created on check-in with `status = Working`, updated in place on the
/// matching check-out.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64,
    pub staff_id: String,
    pub display_name: String,
    pub check_in_at: NaiveDateTime,
    pub check_out_at: Option<NaiveDateTime>,
    pub is_late: bool,
    pub is_short_shift: Option<bool>,
    pub worked_minutes: Option<i64>,
    pub status: EntryStatus,
}

impl LogEntry {
    pub fn is_working(&self) -> bool {
        self.status == EntryStatus::Working
    }

    /// `"8h 29m"`, or `"0h 0m"` while still working.
    pub fn worked_display(&self) -> String {
        format_worked(Duration::minutes(self.worked_minutes.unwrap_or(0)))
    }
}
