// src/export/model.rs

use crate::models::log_entry::LogEntry;
use serde::Serialize;

/// Flat attendance row for payroll exports.
#[derive(Serialize, Clone, Debug)]
pub struct AttendanceExport {
    pub id: i64,
    pub staff_id: String,
    pub name: String,
    pub check_in: String,
    pub check_out: String,
    /// Empty while the shift is open.
    pub worked_minutes: Option<i64>,
    pub worked: String,
    pub late: bool,
    pub short_shift: Option<bool>,
    pub status: String,
}

impl From<&LogEntry> for AttendanceExport {
    fn from(e: &LogEntry) -> Self {
        Self {
            id: e.id,
            staff_id: e.staff_id.clone(),
            name: e.display_name.clone(),
            check_in: e.check_in_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            check_out: e
                .check_out_at
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            worked_minutes: e.worked_minutes,
            worked: e
                .worked_minutes
                .map(|_| e.worked_display())
                .unwrap_or_default(),
            late: e.is_late,
            short_shift: e.is_short_shift,
            status: e.status.to_db_str().to_string(),
        }
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "staff_id",
        "name",
        "check_in",
        "check_out",
        "worked_minutes",
        "worked",
        "late",
        "short_shift",
        "status",
    ]
}

/// Row as strings, in header order (used by XLSX).
pub(crate) fn entry_to_row(e: &AttendanceExport) -> Vec<String> {
    let yes_no = |b: bool| if b { "yes" } else { "no" }.to_string();
    vec![
        e.id.to_string(),
        e.staff_id.clone(),
        e.name.clone(),
        e.check_in.clone(),
        e.check_out.clone(),
        e.worked_minutes.map(|m| m.to_string()).unwrap_or_default(),
        e.worked.clone(),
        yes_no(e.late),
        e.short_shift.map(yes_no).unwrap_or_default(),
        e.status.clone(),
    ]
}
