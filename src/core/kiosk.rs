//! The kiosk context: directory, engine and durable storage owned together.
//!
//! Every user action goes through [`Kiosk`], which validates it, applies
//! it to the engine, rewrites the session snapshot and reports the outcome
//! to a [`Presenter`]. Rendering is entirely the presenter's business.

use crate::core::directory::Directory;
use crate::core::engine::{AttendanceEngine, ResetSummary, resolve_identity};
use crate::core::session_store::SessionSnapshot;
use crate::errors::{AppError, AppResult, AttendanceError};
use crate::models::action::Action;
use crate::models::employee::{Employee, normalize_id};
use crate::models::log_entry::LogEntry;
use crate::storage::{KeyValueStore, SNAPSHOT_KEY};
use chrono::NaiveDateTime;

/// Privileged commands reachable from the kiosk input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommand {
    Reset,
}

/// What a line typed at the kiosk turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskInput {
    Staff(Employee),
    Admin(AdminCommand),
}

/// Receives the outcome of every kiosk action.
pub trait Presenter {
    fn on_check_in_accepted(&mut self, entry: &LogEntry);
    fn on_check_out_accepted(&mut self, entry: &LogEntry);
    fn on_rejected(&mut self, error: &AttendanceError);

    fn on_reset(&mut self, _summary: &ResetSummary) {}

    /// Durable storage failed; the kiosk keeps working in memory.
    fn on_storage_degraded(&mut self, _error: &AppError) {}
}

pub struct Kiosk {
    directory: Directory,
    engine: AttendanceEngine,
    admin_code: Option<String>,
    storage: Option<Box<dyn KeyValueStore>>,
}

impl Kiosk {
    pub fn new(directory: Directory, engine: AttendanceEngine) -> Self {
        Self {
            directory,
            engine,
            admin_code: None,
            storage: None,
        }
    }

    /// Enable the reserved admin reset code.
    ///
    /// A code equal to a real staff id is refused.
    pub fn with_admin_code(mut self, code: Option<&str>) -> AppResult<Self> {
        let code = code.map(normalize_id).filter(|c| !c.is_empty());

        if let Some(c) = &code
            && self.directory.contains(c)
        {
            return Err(AppError::Config(format!(
                "admin_reset_code '{}' collides with a staff id",
                c
            )));
        }

        self.admin_code = code;
        Ok(self)
    }

    /// Attach durable storage and restore the open sessions from it.
    ///
    /// An unreadable store is dropped (in-memory operation); a corrupt
    /// snapshot is ignored and overwritten by the next write.
    pub fn attach_storage(
        &mut self,
        store: Box<dyn KeyValueStore>,
        presenter: &mut dyn Presenter,
    ) {
        match store.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => {
                match SessionSnapshot::from_json(&raw) {
                    Ok(snapshot) => self.engine.restore(snapshot),
                    Err(e) => presenter.on_storage_degraded(&e),
                }
                self.storage = Some(store);
            }
            Ok(None) => self.storage = Some(store),
            Err(e) => presenter.on_storage_degraded(&e),
        }
    }

    /// See [`AttendanceEngine::close_orphans`]; call once sessions are restored.
    pub fn close_orphans(&mut self) -> Vec<LogEntry> {
        self.engine.close_orphans()
    }

    pub fn is_durable(&self) -> bool {
        self.storage.is_some()
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn engine(&self) -> &AttendanceEngine {
        &self.engine
    }

    pub fn resolve_input(&self, raw: &str) -> Result<KioskInput, AttendanceError> {
        let id = normalize_id(raw);

        if let Some(code) = &self.admin_code
            && *code == id
        {
            return Ok(KioskInput::Admin(AdminCommand::Reset));
        }

        resolve_identity(&self.directory, &id).map(KioskInput::Staff)
    }

    /// Resolve a staff id and apply the action in one step.
    ///
    /// The admin code is not a staff id here and is rejected as unknown.
    pub fn submit(
        &mut self,
        raw: &str,
        action: Action,
        now: NaiveDateTime,
        presenter: &mut dyn Presenter,
    ) -> Result<LogEntry, AttendanceError> {
        let employee = match resolve_identity(&self.directory, raw) {
            Ok(e) => e,
            Err(e) => {
                presenter.on_rejected(&e);
                return Err(e);
            }
        };

        match action {
            Action::In => self.check_in(&employee, now, presenter),
            Action::Out => self.check_out(&employee, now, presenter),
        }
    }

    pub fn check_in(
        &mut self,
        employee: &Employee,
        now: NaiveDateTime,
        presenter: &mut dyn Presenter,
    ) -> Result<LogEntry, AttendanceError> {
        match self.engine.check_in(employee, now) {
            Ok(entry) => {
                self.persist(presenter);
                presenter.on_check_in_accepted(&entry);
                Ok(entry)
            }
            Err(e) => {
                presenter.on_rejected(&e);
                Err(e)
            }
        }
    }

    pub fn check_out(
        &mut self,
        employee: &Employee,
        now: NaiveDateTime,
        presenter: &mut dyn Presenter,
    ) -> Result<LogEntry, AttendanceError> {
        match self.engine.check_out(employee, now) {
            Ok(entry) => {
                self.persist(presenter);
                presenter.on_check_out_accepted(&entry);
                Ok(entry)
            }
            Err(e) => {
                presenter.on_rejected(&e);
                Err(e)
            }
        }
    }

    /// Clear all sessions and the log, unconditionally.
    pub fn reset(&mut self, presenter: &mut dyn Presenter) -> ResetSummary {
        let summary = self.engine.reset();
        self.persist(presenter);
        presenter.on_reset(&summary);
        summary
    }

    /// Rewrite the snapshot. On failure storage is dropped for the rest
    /// of the run.
    fn persist(&mut self, presenter: &mut dyn Presenter) {
        let Some(store) = self.storage.as_mut() else {
            return;
        };

        let result = self
            .engine
            .snapshot()
            .to_json()
            .and_then(|json| store.put(SNAPSHOT_KEY, &json));

        if let Err(e) = result {
            self.storage = None;
            presenter.on_storage_degraded(&e);
        }
    }
}
