//! Key-value storage for the durable session snapshot.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;

/// Well-known key holding the serialized open sessions.
pub const SNAPSHOT_KEY: &str = "attendance.active_sessions";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> AppResult<()>;
}
