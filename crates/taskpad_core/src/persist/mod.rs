//! Persistence collaborator for the task collection.
//!
//! # Responsibility
//! - Define the key-value string store contract used by `TaskStore`.
//! - Encode/decode the full collection payload.
//!
//! # Invariants
//! - The whole serialized collection is written under one fixed key on
//!   every mutation; there is no per-task persistence.
//! - Encode then decode reproduces an equal collection, same order.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory_store;
pub mod sqlite_store;

pub use memory_store::MemoryStateStore;
pub use sqlite_store::SqliteStateStore;

/// Fixed key the task collection is stored under.
pub const TASKS_KEY: &str = "tasks";

pub type PersistResult<T> = Result<T, PersistError>;

/// Errors raised by state stores and the collection codec.
#[derive(Debug)]
pub enum PersistError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    Codec(serde_json::Error),
    /// Backend-specific failure that is not a SQLite error, e.g. quota
    /// exhaustion in a browser-bridge store.
    Backend(String),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "state schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Codec(err) => write!(f, "task payload codec failure: {err}"),
            Self::Backend(message) => write!(f, "state backend failure: {message}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Codec(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::Backend(_) => None,
        }
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Durable key-value string store.
///
/// Writes are synchronous from the caller's perspective; the single-threaded
/// event model needs no locking on top of this contract.
pub trait StateStore {
    /// Reads the payload stored under `key`, `None` when absent.
    fn load(&self, key: &str) -> PersistResult<Option<String>>;

    /// Writes `payload` under `key`, replacing any previous value.
    fn save(&self, key: &str, payload: &str) -> PersistResult<()>;
}

/// A borrowed store is a store. Lets callers keep a handle on the backend
/// while the task store drives it, mirroring how repositories borrow a
/// connection.
impl<T: StateStore + ?Sized> StateStore for &T {
    fn load(&self, key: &str) -> PersistResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, payload: &str) -> PersistResult<()> {
        (**self).save(key, payload)
    }
}

/// Serializes the full collection to its persisted JSON form.
pub fn encode_tasks(tasks: &[Task]) -> PersistResult<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Deserializes a persisted payload back into the collection.
pub fn decode_tasks(payload: &str) -> PersistResult<Vec<Task>> {
    Ok(serde_json::from_str(payload)?)
}
