use rusqlite::params;

use super::Store;
use super::models::{NewTask, Task, UNSET_DEADLINE, format_deadline, parse_deadline};
use crate::error::StoreError;

impl Store {
    pub fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description, completed, deadline, priority, category
             FROM tasks
             ORDER BY id",
        )?;
        let tasks = stmt
            .query_map([], |row| {
                let id: i64 = row.get(0)?;
                let deadline: Option<String> = row.get(3)?;
                Ok(Task {
                    id,
                    description: row.get(1)?,
                    completed: row.get(2)?,
                    deadline: stored_deadline(id, deadline.as_deref()),
                    priority: row.get(4)?,
                    category: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Insert a pending task and return the id the database assigned to it.
    pub fn insert_task(&self, task: &NewTask) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO tasks (description, completed, deadline, priority, category)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                task.description,
                false,
                format_deadline(task.deadline),
                task.priority,
                task.category
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, "inserted task");
        Ok(id)
    }

    /// Delete by id. An id with no row is not an error.
    pub fn delete_task(&self, id: i64) -> Result<(), StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        tracing::info!(id, removed, "deleted task");
        Ok(())
    }

    /// Set the completion flag by id. An id with no row is not an error.
    pub fn set_completed(&self, id: i64, completed: bool) -> Result<(), StoreError> {
        let updated = self.conn.execute(
            "UPDATE tasks SET completed = ?1 WHERE id = ?2",
            params![completed, id],
        )?;
        tracing::info!(id, completed, updated, "updated task completion");
        Ok(())
    }
}

/// A row whose deadline does not parse still loads, dated [`UNSET_DEADLINE`],
/// so it can be seen and removed.
fn stored_deadline(id: i64, raw: Option<&str>) -> chrono::NaiveDate {
    match raw.map(parse_deadline) {
        Some(Ok(date)) => date,
        _ => {
            tracing::warn!(id, ?raw, "unreadable deadline in stored task");
            UNSET_DEADLINE
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn store() -> Store {
        let store = Store::open_in_memory().unwrap();
        store.migrate().unwrap();
        store
    }

    fn new_task(description: &str, deadline: (i32, u32, u32)) -> NewTask {
        NewTask {
            description: description.into(),
            deadline: NaiveDate::from_ymd_opt(deadline.0, deadline.1, deadline.2).unwrap(),
            priority: "Low".into(),
            category: "Home".into(),
        }
    }

    fn ids(store: &Store) -> Vec<i64> {
        store.list_tasks().unwrap().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_migrate_is_idempotent_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tasks.db");

        let store = Store::open(&path).unwrap();
        store.migrate().unwrap();
        store.insert_task(&new_task("kept", (2025, 1, 1))).unwrap();
        store.close().unwrap();

        let store = Store::open(&path).unwrap();
        store.migrate().unwrap();
        store.migrate().unwrap();

        let tables: i64 = store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
        assert_eq!(store.list_tasks().unwrap().len(), 1);
    }

    #[test]
    fn test_list_tasks_empty() {
        assert!(store().list_tasks().unwrap().is_empty());
    }

    #[test]
    fn test_list_without_schema_fails() {
        let store = Store::open_in_memory().unwrap();
        assert!(matches!(store.list_tasks(), Err(StoreError::Sqlite(_))));
    }

    #[test]
    fn test_insert_then_list() {
        let store = store();
        let id = store.insert_task(&new_task("Buy milk", (2025, 3, 1))).unwrap();

        let tasks = store.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(
            tasks[0],
            Task {
                id,
                description: "Buy milk".into(),
                completed: false,
                deadline: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                priority: "Low".into(),
                category: "Home".into(),
            }
        );
    }

    #[test]
    fn test_deadline_is_stored_as_iso_text() {
        let store = store();
        let id = store.insert_task(&new_task("t", (2025, 3, 1))).unwrap();
        let raw: String = store
            .conn
            .query_row("SELECT deadline FROM tasks WHERE id = ?1", params![id], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(raw, "2025-03-01");
    }

    #[test]
    fn test_ids_increase_and_are_not_reused() {
        let store = store();
        let first = store.insert_task(&new_task("a", (2025, 1, 1))).unwrap();
        let second = store.insert_task(&new_task("b", (2025, 1, 2))).unwrap();
        assert!(second > first);

        store.delete_task(second).unwrap();
        let third = store.insert_task(&new_task("c", (2025, 1, 3))).unwrap();
        assert!(third > second);
        assert_eq!(ids(&store), vec![first, third]);
    }

    #[test]
    fn test_delete_task() {
        let store = store();
        let keep = store.insert_task(&new_task("keep", (2025, 1, 1))).unwrap();
        let gone = store.insert_task(&new_task("gone", (2025, 1, 1))).unwrap();

        store.delete_task(gone).unwrap();
        assert_eq!(ids(&store), vec![keep]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let store = store();
        store.insert_task(&new_task("a", (2025, 1, 1))).unwrap();
        let before = store.list_tasks().unwrap();

        store.delete_task(999).unwrap();
        assert_eq!(store.list_tasks().unwrap(), before);
    }

    #[test]
    fn test_set_completed() {
        let store = store();
        let id = store.insert_task(&new_task("a", (2025, 1, 1))).unwrap();
        let before = store.list_tasks().unwrap().remove(0);

        store.set_completed(id, true).unwrap();
        let after = store.list_tasks().unwrap().remove(0);
        assert!(after.completed);
        assert_eq!(
            Task {
                completed: false,
                ..after
            },
            before
        );
    }

    #[test]
    fn test_set_completed_missing_id_is_noop() {
        let store = store();
        store.insert_task(&new_task("a", (2025, 1, 1))).unwrap();
        let before = store.list_tasks().unwrap();

        store.set_completed(42, true).unwrap();
        assert_eq!(store.list_tasks().unwrap(), before);
    }

    #[test]
    fn test_unreadable_deadline_still_loads() {
        let store = store();
        store
            .conn
            .execute_batch(
                "INSERT INTO tasks (description, completed, deadline, priority, category)
                 VALUES ('good', 0, '2025-01-01', 'Low', 'Home');
                 INSERT INTO tasks (description, completed, deadline, priority, category)
                 VALUES ('bad', 0, 'someday', 'Low', 'Home');
                 INSERT INTO tasks (description, completed, deadline, priority, category)
                 VALUES ('blank', 1, '', 'High', 'Work');",
            )
            .unwrap();

        let tasks = store.list_tasks().unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].deadline, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(tasks[1].deadline, UNSET_DEADLINE);
        assert_eq!(tasks[2].deadline, UNSET_DEADLINE);
        assert_eq!(tasks[1].detail_lines()[2], "Deadline: 0001-01-01");

        store.delete_task(tasks[1].id).unwrap();
        assert_eq!(ids(&store), vec![tasks[0].id, tasks[2].id]);
    }

    #[test]
    fn test_list_is_in_insertion_order() {
        let store = store();
        let a = store.insert_task(&new_task("late", (2030, 1, 1))).unwrap();
        let b = store.insert_task(&new_task("early", (2020, 1, 1))).unwrap();
        let c = store.insert_task(&new_task("middle", (2025, 1, 1))).unwrap();
        assert_eq!(ids(&store), vec![a, b, c]);
    }
}
