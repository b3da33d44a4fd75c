use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the task store.
///
/// During startup any of these is fatal. Inside a flow they are reported to
/// the user and the flow returns to the menu.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database at {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create the tasks table")]
    Schema(#[source] rusqlite::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Text typed by the user that a flow could not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    Deadline(String),

    #[error("invalid task id {0:?}")]
    TaskId(String),
}
