//! Task storage with pluggable backends.
//!
//! Supports:
//! - `memory`: In-memory storage (non-persistent, for testing)
//! - `sqlite`: SQLite database (WAL mode)
//!
//! Lookup misses are `Ok(None)`, never errors; translating a miss into a
//! domain failure is the service's job.

mod memory;
mod sqlite;

pub use memory::InMemoryTaskStore;
pub use sqlite::SqliteTaskStore;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use super::model::{Task, TaskDraft};

/// Task store trait - implemented by all storage backends.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Whether this store persists data across restarts.
    fn is_persistent(&self) -> bool;

    /// Insert a new task, assigning a fresh identity. Identities are never
    /// reused, even after deletion.
    async fn insert(&self, draft: TaskDraft) -> Result<Task, String>;

    /// Overwrite an existing task's fields. The identity selects the row and
    /// is never changed.
    async fn update(&self, task: &Task) -> Result<(), String>;

    /// Get a single task by identity.
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, String>;

    /// List all tasks in store-defined order (ascending identity for both
    /// built-in backends).
    async fn find_all(&self) -> Result<Vec<Task>, String>;

    /// Delete a task by identity. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, String>;
}

/// Task store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStoreKind {
    Memory,
    #[default]
    Sqlite,
}

impl TaskStoreKind {
    /// Parse from environment variable value.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" => Self::Memory,
            "sqlite" | "db" => Self::Sqlite,
            _ => Self::default(),
        }
    }
}

/// Create a task store based on kind and configuration.
pub async fn create_task_store(
    kind: TaskStoreKind,
    data_dir: PathBuf,
) -> Result<Arc<dyn TaskStore>, String> {
    match kind {
        TaskStoreKind::Memory => Ok(Arc::new(InMemoryTaskStore::new())),
        TaskStoreKind::Sqlite => {
            let store = SqliteTaskStore::new(data_dir).await?;
            Ok(Arc::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::model::{TaskPriority, TaskStatus};

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: "test task".to_string(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_date: None,
        }
    }

    #[tokio::test]
    async fn memory_store_assigns_increasing_identities() {
        let store = InMemoryTaskStore::new();

        let first = store.insert(draft("first")).await.expect("insert failed");
        let second = store.insert(draft("second")).await.expect("insert failed");

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn memory_store_never_reuses_a_deleted_identity() {
        let store = InMemoryTaskStore::new();

        let task = store.insert(draft("doomed")).await.expect("insert failed");
        assert!(store.delete(task.id).await.expect("delete failed"));

        let next = store.insert(draft("next")).await.expect("insert failed");
        assert!(next.id > task.id, "identity {} was reused", task.id);
    }

    #[tokio::test]
    async fn memory_store_miss_is_none_not_error() {
        let store = InMemoryTaskStore::new();
        let found = store.find_by_id(99).await.expect("lookup failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn sqlite_store_round_trips_a_task() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let store = SqliteTaskStore::new(dir.path().to_path_buf())
            .await
            .expect("failed to open store");

        let mut payload = draft("Persisted task");
        payload.status = TaskStatus::InProgress;
        payload.priority = TaskPriority::High;
        payload.due_date = chrono::NaiveDate::from_ymd_opt(2026, 12, 31);

        let created = store.insert(payload).await.expect("insert failed");
        let loaded = store
            .find_by_id(created.id)
            .await
            .expect("lookup failed")
            .expect("task missing");

        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn sqlite_store_update_overwrites_fields_in_place() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let store = SqliteTaskStore::new(dir.path().to_path_buf())
            .await
            .expect("failed to open store");

        let mut task = store.insert(draft("original")).await.expect("insert failed");
        task.description = "rewritten".to_string();
        task.status = TaskStatus::Completed;
        store.update(&task).await.expect("update failed");

        let loaded = store
            .find_by_id(task.id)
            .await
            .expect("lookup failed")
            .expect("task missing");
        assert_eq!(loaded.description, "rewritten");
        assert_eq!(loaded.status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn sqlite_store_delete_removes_the_row() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let store = SqliteTaskStore::new(dir.path().to_path_buf())
            .await
            .expect("failed to open store");

        let task = store.insert(draft("doomed")).await.expect("insert failed");
        assert!(store.delete(task.id).await.expect("delete failed"));
        assert!(!store.delete(task.id).await.expect("second delete failed"));
        assert!(store
            .find_by_id(task.id)
            .await
            .expect("lookup failed")
            .is_none());
    }

    #[tokio::test]
    async fn sqlite_store_lists_in_identity_order() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let store = SqliteTaskStore::new(dir.path().to_path_buf())
            .await
            .expect("failed to open store");

        for title in ["a", "bb", "ccc"] {
            store.insert(draft(title)).await.expect("insert failed");
        }

        let all = store.find_all().await.expect("list failed");
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn store_kind_parses_env_values() {
        assert_eq!(TaskStoreKind::from_str("memory"), TaskStoreKind::Memory);
        assert_eq!(TaskStoreKind::from_str("sqlite"), TaskStoreKind::Sqlite);
        assert_eq!(TaskStoreKind::from_str("db"), TaskStoreKind::Sqlite);
        assert_eq!(TaskStoreKind::from_str("bogus"), TaskStoreKind::Sqlite);
    }
}
