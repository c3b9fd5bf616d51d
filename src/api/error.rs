//! Maps pipeline failures onto HTTP responses.
//!
//! Every handler returns `Result<_, ApiError>`; this is the single place
//! where a [`TaskError`] becomes a status code and a stable plain-text body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::task::{TaskError, TaskStatus};

/// Transport-level wrapper around the domain failure taxonomy.
#[derive(Debug)]
pub struct ApiError(pub TaskError);

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    /// A body that failed the structural parse stage (JSON syntax error,
    /// non-object body, wrong content type).
    fn from(rejection: JsonRejection) -> Self {
        Self(TaskError::malformed(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // First matching rule wins; messages are part of the API contract.
        let (status, body) = match self.0 {
            TaskError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Task not found with id: {id}"),
            ),
            TaskError::Validation(rule) => {
                (StatusCode::BAD_REQUEST, format!("Validation failed: {rule}"))
            }
            TaskError::Malformed { field: Some(field), .. } if field == "status" => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Invalid value for 'status'. Allowed values: {}",
                    TaskStatus::ALLOWED
                ),
            ),
            TaskError::Malformed { detail, .. } => (
                StatusCode::BAD_REQUEST,
                format!("Malformed JSON request: {detail}"),
            ),
            TaskError::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal Server Error: {detail}"),
            ),
        };

        if status.is_server_error() {
            tracing::error!(%status, "{}", body);
        } else {
            tracing::warn!(%status, "{}", body);
        }

        (status, body).into_response()
    }
}
