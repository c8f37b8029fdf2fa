//! SQLite-backed store.
//!
//! A [`Database`] is a cloneable handle around one connection; all
//! operations take `&self` and serialize through an internal mutex. Every
//! mutation is a single statement, so a poisoned lock cannot leave a row
//! half-written.

mod chicks;
mod completions;
mod flocks;
pub mod schema;
pub mod seed;
mod tasks;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;

use crate::error::{CoreError, Result};

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open (or create) the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::Validation(format!("cannot create data dir: {e}")))?;
        }
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open the database in the platform data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(default_data_dir()?.join("brooder.db"))
    }

    /// In-memory database for tests.
    pub fn open_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Apply the schema. Idempotent.
    pub fn migrate(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute_batch(schema::SCHEMA)?;
            Ok(())
        })
    }

    /// Run a closure against the underlying connection.
    pub fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        f(&conn)
    }
}

/// Platform data directory for the default database and media files.
pub fn default_data_dir() -> Result<PathBuf> {
    directories::ProjectDirs::from("com", "brooder", "brooder")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CoreError::Validation("cannot determine data directory".into()))
}

// Timestamps are stored as RFC 3339 TEXT, day keys as YYYY-MM-DD TEXT.

pub(crate) fn format_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

pub(crate) fn parse_ts(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CoreError::Corrupt(format!("bad timestamp {s:?}")))
}

pub(crate) fn parse_opt_ts(s: Option<String>) -> Result<Option<DateTime<Utc>>> {
    s.map(|s| parse_ts(&s)).transpose()
}

pub(crate) fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

pub(crate) fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| CoreError::Corrupt(format!("bad day date {s:?}")))
}

pub(crate) fn parse_uuid(s: &str) -> Result<uuid::Uuid> {
    uuid::Uuid::parse_str(s).map_err(|_| CoreError::Corrupt(format!("bad uuid {s:?}")))
}
