use crate::error::StoreError;
use crate::store::{Store, Task};

/// In-memory copy of every task as of the last refresh.
///
/// The snapshot is stale as soon as anything mutates the store; callers
/// refresh after every mutation instead of patching it.
#[derive(Debug, Default)]
pub struct TaskCache {
    tasks: Vec<Task>,
}

impl TaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the full task list. The old snapshot is only replaced once the
    /// read has succeeded.
    pub fn refresh(&mut self, store: &Store) -> Result<(), StoreError> {
        let tasks = store.list_tasks()?;
        tracing::debug!(count = tasks.len(), "refreshed task cache");
        self.tasks = tasks;
        Ok(())
    }

    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }
}
