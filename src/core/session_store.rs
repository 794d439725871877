//! Active sessions: which staff members are currently checked in, and since when.

use crate::errors::{AppError, AppResult, AttendanceError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("a session is already open for {0}")]
    AlreadyOpen(String),

    #[error("no active session for {0}")]
    NoActiveSession(String),
}

impl From<SessionError> for AttendanceError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::AlreadyOpen(id) => AttendanceError::AlreadyCheckedIn(id),
            SessionError::NoActiveSession(id) => AttendanceError::NoActiveSession(id),
        }
    }
}

/// Serializable view of the store: staff id → ISO-8601 check-in timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionSnapshot(pub BTreeMap<String, NaiveDateTime>);

impl SessionSnapshot {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::Snapshot(e.to_string()))
    }
}

/// At most one open session per staff id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    sessions: BTreeMap<String, NaiveDateTime>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, staff_id: &str) -> bool {
        self.sessions.contains_key(staff_id)
    }

    pub fn check_in_at(&self, staff_id: &str) -> Option<NaiveDateTime> {
        self.sessions.get(staff_id).copied()
    }

    pub fn open(&mut self, staff_id: &str, at: NaiveDateTime) -> Result<(), SessionError> {
        if self.has(staff_id) {
            return Err(SessionError::AlreadyOpen(staff_id.to_string()));
        }
        self.sessions.insert(staff_id.to_string(), at);
        Ok(())
    }

    /// Close the session and return when it was opened.
    pub fn close(&mut self, staff_id: &str) -> Result<NaiveDateTime, SessionError> {
        self.sessions
            .remove(staff_id)
            .ok_or_else(|| SessionError::NoActiveSession(staff_id.to_string()))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot(self.sessions.clone())
    }

    /// Replace the whole store with the snapshot content.
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        self.sessions = snapshot.0;
    }

    /// Drop every open session. Only the admin reset calls this.
    pub fn clear(&mut self) -> usize {
        let n = self.sessions.len();
        self.sessions.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Open sessions ordered by staff id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NaiveDateTime)> {
        self.sessions.iter().map(|(k, v)| (k.as_str(), v))
    }
}
