mod models;
mod queries;

pub use models::*;

use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::StoreError;

pub struct Store {
    pub conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            // A missing directory surfaces as an open failure below.
            let _ = fs::create_dir_all(parent);
        }
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|source| StoreError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "opened task database");
        Ok(Store { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: ":memory:".into(),
            source,
        })?;
        Ok(Store { conn })
    }

    /// Create the tasks table if it does not exist yet. Safe to run on every start.
    pub fn migrate(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                "
                CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    description TEXT NOT NULL,
                    completed BOOLEAN NOT NULL DEFAULT 0,
                    deadline TEXT NOT NULL,
                    priority TEXT NOT NULL,
                    category TEXT NOT NULL
                );
                ",
            )
            .map_err(StoreError::Schema)
    }

    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))?;
        tracing::debug!("closed task database");
        Ok(())
    }
}
