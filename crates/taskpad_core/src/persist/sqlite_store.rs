//! SQLite-backed state store.
//!
//! # Responsibility
//! - Provide the durable key-value backend for the task collection.
//! - Keep connection bootstrap and schema versioning inside this module.
//!
//! # Invariants
//! - Returned stores have the schema fully applied.
//! - Schema version is tracked via `PRAGMA user_version`; a database newer
//!   than this binary is rejected instead of silently misread.

use super::{PersistError, PersistResult, StateStore};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

const SCHEMA_VERSION: u32 = 1;
const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS app_state (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";

/// Key-value store persisted in a SQLite database.
#[derive(Debug)]
pub struct SqliteStateStore {
    conn: Connection,
}

impl SqliteStateStore {
    /// Opens (or creates) a database file and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let started_at = Instant::now();
        let conn = Connection::open(path)?;
        match Self::bootstrap(conn) {
            Ok(store) => {
                info!(
                    "event=state_open module=persist status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=state_open module=persist status=error mode=file error={err}"
                );
                Err(err)
            }
        }
    }

    /// Opens an in-memory database, mainly for tests and smoke runs.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> PersistResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn apply_schema(conn: &Connection) -> PersistResult<()> {
    let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

    if db_version > SCHEMA_VERSION {
        return Err(PersistError::UnsupportedSchemaVersion {
            db_version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    if db_version < SCHEMA_VERSION {
        conn.execute_batch(SCHEMA_SQL)?;
        conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    }

    Ok(())
}

impl StateStore for SqliteStateStore {
    fn load(&self, key: &str) -> PersistResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&self, key: &str, payload: &str) -> PersistResult<()> {
        self.conn.execute(
            "INSERT INTO app_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, payload],
        )?;
        Ok(())
    }
}
