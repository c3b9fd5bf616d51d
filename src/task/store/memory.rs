//! In-memory task store (non-persistent).

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TaskStore;
use crate::task::model::{Task, TaskDraft};

#[derive(Clone)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<HashMap<i64, Task>>>,
    // Monotonic counter: identities of deleted tasks are never handed out again.
    next_id: Arc<AtomicI64>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    fn is_persistent(&self) -> bool {
        false
    }

    async fn insert(&self, draft: TaskDraft) -> Result<Task, String> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let task = draft.into_task(id);
        self.tasks.write().await.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> Result<(), String> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&task.id) {
            Some(slot) => {
                *slot = task.clone();
                Ok(())
            }
            None => Err(format!("Task {} not in store", task.id)),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, String> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Task>, String> {
        let mut tasks: Vec<Task> = self.tasks.read().await.values().cloned().collect();
        tasks.sort_by_key(|t| t.id);
        Ok(tasks)
    }

    async fn delete(&self, id: i64) -> Result<bool, String> {
        Ok(self.tasks.write().await.remove(&id).is_some())
    }
}
