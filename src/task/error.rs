//! Failure taxonomy for the task pipeline.
//!
//! Every failure a request can surface is one of these kinds. Nothing is
//! handled locally: errors propagate untouched to the API boundary, where
//! `api::ApiError` converts them into HTTP responses.

use thiserror::Error;

/// A failure surfaced by payload conversion, the service, or the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// An identity lookup found nothing.
    #[error("Task not found with id: {0}")]
    NotFound(i64),

    /// The payload violates a field-level rule; carries the first violated
    /// rule's message.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The payload could not be converted into a task at all. `field` names
    /// the offending field when the failure is attributable to one.
    #[error("malformed payload: {detail}")]
    Malformed {
        field: Option<String>,
        detail: String,
    },

    /// Store failure or any other unexpected condition.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Malformed-payload error attributed to a named field.
    pub fn malformed_field(field: &str, detail: impl Into<String>) -> Self {
        Self::Malformed {
            field: Some(field.to_string()),
            detail: detail.into(),
        }
    }

    /// Malformed-payload error with no single offending field (e.g. a JSON
    /// syntax error).
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            field: None,
            detail: detail.into(),
        }
    }
}
