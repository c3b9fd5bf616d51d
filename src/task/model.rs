//! Task entity and its enumerated fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a task.
///
/// Wire tokens are the exact uppercase forms; anything else is rejected at
/// payload conversion, never defaulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Not started yet
    #[default]
    Pending,
    /// Work has begun
    InProgress,
    /// Finished
    Completed,
}

impl TaskStatus {
    /// Comma-separated list of accepted tokens, for error messages.
    pub const ALLOWED: &'static str = "PENDING, IN_PROGRESS, COMPLETED";

    /// Parse an exact (case-sensitive) wire token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "PENDING" => Some(Self::Pending),
            "IN_PROGRESS" => Some(Self::InProgress),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }

    /// The wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// Comma-separated list of accepted tokens, for error messages.
    pub const ALLOWED: &'static str = "LOW, MEDIUM, HIGH";

    /// Parse an exact (case-sensitive) wire token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            _ => None,
        }
    }

    /// The wire token for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// A persisted task.
///
/// The identity is assigned by the store on insert and is immutable
/// afterwards; identities are never reused, even after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identity
    pub id: i64,

    /// Short human-readable title
    pub title: String,

    /// What the task is about
    pub description: String,

    /// Current lifecycle status
    pub status: TaskStatus,

    /// Priority bucket
    pub priority: TaskPriority,

    /// Optional due date (ISO `YYYY-MM-DD` on the wire)
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// A validated task that has not been persisted yet.
///
/// Carrying no identity at the type level is what makes "a task without an
/// assigned identity has never been persisted" hold by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Attach a store-assigned identity, producing the persisted form.
    pub fn into_task(self, id: i64) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
        }
    }
}
