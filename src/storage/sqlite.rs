use super::KeyValueStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{OptionalExtension, params};

/// Store backed by the `kv` table of the attendance database.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path` (running migrations if needed).
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::open(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn unavailable(e: rusqlite::Error) -> AppError {
    AppError::Storage(e.to_string())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(unavailable)
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Local::now().to_rfc3339()],
            )
            .map_err(unavailable)?;
        Ok(())
    }
}
