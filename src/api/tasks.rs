//! Task management API endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::task::{Task, TaskPayload};

use super::error::ApiError;
use super::routes::AppState;

/// Create task routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_task))
        .route("/", get(list_tasks))
        .route("/:id", get(get_task))
        .route("/:id", put(update_task))
        .route("/:id", delete(delete_task))
}

/// POST /api/tasks - Create a new task.
async fn create_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(payload) = payload?;
    let draft = payload.into_draft()?;
    let task = state.tasks.create(draft).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks - List all tasks.
async fn list_tasks(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.tasks.list().await?;
    Ok(Json(tasks))
}

/// GET /api/tasks/{id} - Get a task by identity.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let task = state.tasks.get_by_id(id).await?;
    Ok(Json(task))
}

/// PUT /api/tasks/{id} - Overwrite a task's fields.
async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(payload) = payload?;
    let draft = payload.into_draft()?;
    let task = state.tasks.update(id, draft).await?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id} - Delete a task.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<String, ApiError> {
    state.tasks.delete(id).await?;
    Ok("Task deleted successfully".to_string())
}
