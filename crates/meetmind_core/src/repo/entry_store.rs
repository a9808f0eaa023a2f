//! Named-entry persistence port and its backends.
//!
//! # Responsibility
//! - Abstract the single mutable persisted value behind read/write/delete.
//! - Provide an in-memory backend for tests and a SQLite backend for
//!   durable sessions.
//!
//! # Invariants
//! - A write replaces the whole value of an entry; there are no partial
//!   updates.
//! - Reading a missing entry is `Ok(None)`, never an error.
//! - No write ordering or locking across processes; one writer per session.

use crate::db::DbError;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Backend failure while accessing a named entry.
#[derive(Debug)]
pub enum StorageError {
    /// The backend refused a value larger than its capacity.
    QuotaExceeded { key: String, size: usize, limit: usize },
    /// The backend is not accepting writes.
    WriteRejected(String),
    Db(DbError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded { key, size, limit } => write!(
                f,
                "entry `{key}` of {size} bytes exceeds storage quota of {limit} bytes"
            ),
            Self::WriteRejected(key) => write!(f, "storage rejected write to entry `{key}`"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence port over named text entries.
pub trait EntryStorage {
    /// Returns the entry value, or `None` when the entry does not exist.
    fn read_entry(&self, key: &str) -> StorageResult<Option<String>>;
    /// Overwrites the entry value, creating it when missing.
    fn write_entry(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Deletes the entry. Deleting a missing entry is a no-op.
    fn delete_entry(&self, key: &str) -> StorageResult<()>;
}

impl<S: EntryStorage + ?Sized> EntryStorage for &S {
    fn read_entry(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read_entry(key)
    }

    fn write_entry(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write_entry(key, value)
    }

    fn delete_entry(&self, key: &str) -> StorageResult<()> {
        (**self).delete_entry(key)
    }
}

/// Process-local entry storage.
///
/// Single-threaded by construction (`!Sync`), matching one session.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following write fail with `StorageError::WriteRejected`.
    ///
    /// Used to exercise quota/failure paths of callers.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl EntryStorage for MemoryStorage {
    fn read_entry(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write_entry(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.reject_writes.get() {
            return Err(StorageError::WriteRejected(key.to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_entry(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// SQLite-backed entry storage over the `entries` table.
pub struct SqliteStorage {
    conn: Connection,
    max_value_bytes: Option<usize>,
}

impl SqliteStorage {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: Connection) -> Self {
        Self {
            conn,
            max_value_bytes: None,
        }
    }

    /// Rejects writes whose value is larger than `limit` bytes.
    pub fn with_quota(mut self, limit: usize) -> Self {
        self.max_value_bytes = Some(limit);
        self
    }

    /// Gives back the underlying connection.
    pub fn into_inner(self) -> Connection {
        self.conn
    }
}

impl EntryStorage for SqliteStorage {
    fn read_entry(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_entry(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(limit) = self.max_value_bytes {
            if value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    size: value.len(),
                    limit,
                });
            }
        }

        self.conn.execute(
            "INSERT INTO entries (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        debug!(
            "event=entry_write module=storage status=ok bytes={}",
            value.len()
        );
        Ok(())
    }

    fn delete_entry(&self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}
