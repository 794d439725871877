//! Builds a ready-to-use [`Kiosk`] from the configuration.

use crate::config::Config;
use crate::core::{AttendanceEngine, AttendancePolicy, Directory, Kiosk, Presenter};
use crate::db::pool::DbPool;
use crate::db::queries::{load_entries, upsert_entry};
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::utils::path::expand_tilde;

pub fn load_directory(cfg: &Config) -> AppResult<Directory> {
    Directory::load(&expand_tilde(&cfg.directory))
}

/// Directory + policy + recorded log + (optionally) the durable snapshot.
pub fn open_kiosk(cfg: &Config, pool: &DbPool, presenter: &mut dyn Presenter) -> AppResult<Kiosk> {
    let directory = load_directory(cfg)?;
    let policy = AttendancePolicy::from_config(cfg)?;
    let log = load_entries(pool, None)?;

    let mut kiosk = Kiosk::new(directory, AttendanceEngine::with_log(policy, log))
        .with_admin_code(cfg.admin_reset_code.as_deref())?;

    if cfg.persist_sessions {
        match SqliteStore::open(&cfg.database) {
            Ok(store) => kiosk.attach_storage(Box::new(store), presenter),
            Err(e) => presenter.on_storage_degraded(&e),
        }
    }

    for entry in kiosk.close_orphans() {
        upsert_entry(&pool.conn, &entry)?;
    }

    Ok(kiosk)
}
