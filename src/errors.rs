//! Unified application error type.
//! All modules (db, core, cli, storage, export) return AppError to keep the
//! error handling consistent and easy to manage. Attendance validation
//! failures have their own kind so the kiosk can surface them as rejections.

use std::io;
use thiserror::Error;

/// User-input validation failures of the attendance state machine.
///
/// These are never fatal: the kiosk reports them and waits for the next
/// input. State is never mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    #[error("Please enter a staff ID")]
    EmptyInput,

    #[error("ACCESS DENIED: staff ID '{0}' not found in system")]
    UnknownStaffId(String),

    #[error("{0} is already checked in")]
    AlreadyCheckedIn(String),

    #[error("No active check-in found for {0}")]
    NoActiveSession(String),
}

impl AttendanceError {
    /// Short machine-friendly tag, used by the internal log.
    pub fn kind(&self) -> &'static str {
        match self {
            AttendanceError::EmptyInput => "empty_input",
            AttendanceError::UnknownStaffId(_) => "unknown_staff_id",
            AttendanceError::AlreadyCheckedIn(_) => "already_checked_in",
            AttendanceError::NoActiveSession(_) => "no_active_session",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Attendance
    // ---------------------------
    #[error(transparent)]
    Attendance(#[from] AttendanceError),

    #[error("Staff directory error: {0}")]
    Directory(String),

    #[error("Session snapshot error: {0}")]
    Snapshot(String),

    #[error("Storage unavailable: {0}")]
    Storage(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
