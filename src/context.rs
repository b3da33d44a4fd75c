use crate::cache::TaskCache;
use crate::error::StoreError;
use crate::store::Store;

/// Storage handle plus the task snapshot, owned by the menu for the lifetime
/// of the process and lent to each flow.
pub struct Context {
    pub store: Store,
    pub cache: TaskCache,
}

impl Context {
    /// Ensure the schema exists and load the initial snapshot.
    pub fn new(store: Store) -> Result<Self, StoreError> {
        store.migrate()?;
        let mut cache = TaskCache::new();
        cache.refresh(&store)?;
        tracing::info!(tasks = cache.snapshot().len(), "loaded tasks");
        Ok(Context { store, cache })
    }

    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.cache.refresh(&self.store)
    }

    pub fn close(self) -> Result<(), StoreError> {
        self.store.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_schema_and_loads() {
        let ctx = Context::new(Store::open_in_memory().unwrap()).unwrap();
        assert!(ctx.cache.snapshot().is_empty());
        assert!(ctx.store.list_tasks().unwrap().is_empty());
        ctx.close().unwrap();
    }

    #[test]
    fn new_loads_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.db");
        {
            let store = Store::open(&path).unwrap();
            store.migrate().unwrap();
            store
                .conn
                .execute_batch(
                    "INSERT INTO tasks (description, completed, deadline, priority, category)
                     VALUES ('old', 1, '2024-05-05', 'High', 'Work');",
                )
                .unwrap();
            store.close().unwrap();
        }

        let ctx = Context::new(Store::open(&path).unwrap()).unwrap();
        let tasks = ctx.cache.snapshot();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].completed);
        assert_eq!(tasks[0].description, "old");
    }

    #[test]
    fn new_loads_rows_with_unreadable_deadlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.db");
        {
            let store = Store::open(&path).unwrap();
            store.migrate().unwrap();
            store
                .conn
                .execute_batch(
                    "INSERT INTO tasks (description, completed, deadline, priority, category)
                     VALUES ('good', 0, '2025-01-01', 'Low', 'Home');
                     INSERT INTO tasks (description, completed, deadline, priority, category)
                     VALUES ('bad', 0, 'someday', 'Low', 'Home');",
                )
                .unwrap();
            store.close().unwrap();
        }

        let ctx = Context::new(Store::open(&path).unwrap()).unwrap();
        let tasks = ctx.cache.snapshot();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "good");
        assert_eq!(tasks[1].description, "bad");
        assert_eq!(tasks[1].deadline, crate::store::UNSET_DEADLINE);
    }
}
