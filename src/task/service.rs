//! Business orchestration between the API layer and the task store.
//!
//! The service is transport-agnostic: it deals in validated drafts and
//! [`TaskError`], never in HTTP types. The store is injected once at
//! construction and passed down, no ambient lookup.

use std::sync::Arc;

use super::error::TaskError;
use super::model::{Task, TaskDraft};
use super::store::TaskStore;

/// CRUD orchestration over an injected [`TaskStore`].
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Persist a new task. The store assigns a fresh identity; drafts carry
    /// none, so a caller-supplied identity is impossible.
    pub async fn create(&self, draft: TaskDraft) -> Result<Task, TaskError> {
        self.store
            .insert(draft)
            .await
            .map_err(TaskError::Internal)
    }

    /// Look up a task by identity, failing with `NotFound` if absent.
    pub async fn get_by_id(&self, id: i64) -> Result<Task, TaskError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(TaskError::Internal)?
            .ok_or(TaskError::NotFound(id))
    }

    /// All persisted tasks, in store-defined order.
    pub async fn list(&self) -> Result<Vec<Task>, TaskError> {
        self.store.find_all().await.map_err(TaskError::Internal)
    }

    /// Overwrite an existing task's fields in place. `NotFound` propagates
    /// unchanged; the identity is never altered.
    pub async fn update(&self, id: i64, draft: TaskDraft) -> Result<Task, TaskError> {
        let mut existing = self.get_by_id(id).await?;

        existing.title = draft.title;
        existing.description = draft.description;
        existing.status = draft.status;
        existing.priority = draft.priority;
        existing.due_date = draft.due_date;

        self.store
            .update(&existing)
            .await
            .map_err(TaskError::Internal)?;
        Ok(existing)
    }

    /// Remove an existing task. `NotFound` propagates unchanged; a removed
    /// identity is retired permanently by the store.
    pub async fn delete(&self, id: i64) -> Result<(), TaskError> {
        let existing = self.get_by_id(id).await?;
        self.store
            .delete(existing.id)
            .await
            .map_err(TaskError::Internal)?;
        Ok(())
    }
}
