//! SQLite form cache for the stockmetrics engine.
//!
//! Implements the `FormStoreTrait` port defined in `stockmetrics-core` over
//! a single key-value table. The engine stays storage-agnostic; this crate
//! is the only place SQLite appears.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use stockmetrics_core::errors::{Error, Result};
use stockmetrics_core::store::FormStoreTrait;

/// `FormStoreTrait` backed by a SQLite database file.
///
/// One row per form key; saves upsert. The connection is serialized behind
/// a mutex since the engine is single-threaded and the store sees one call
/// at a time.
pub struct SqliteFormStore {
    conn: Mutex<Connection>,
}

impl SqliteFormStore {
    /// Opens (or creates) the cache database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(storage_error)?;
        Self::with_connection(conn)
    }

    /// Opens an in-memory cache, useful for ephemeral sessions.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(storage_error)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS form_cache (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(storage_error)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| Error::Repository(format!("Form cache lock poisoned: {}", e)))
    }
}

impl FormStoreTrait for SqliteFormStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT value FROM form_cache WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(storage_error)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO form_cache (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(storage_error)?;
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM form_cache WHERE key = ?1", params![key])
            .map_err(storage_error)?;
        Ok(())
    }
}

fn storage_error(e: rusqlite::Error) -> Error {
    Error::Repository(format!("Form cache query failed: {}", e))
}
