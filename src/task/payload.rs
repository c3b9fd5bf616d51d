//! Incoming task payloads and the checks that turn them into drafts.
//!
//! Parsing is two-staged: the HTTP body first deserializes into the loose
//! [`TaskPayload`] shape (every field optional, enums and dates still raw
//! strings), then [`TaskPayload::into_draft`] converts and validates it.
//! Conversion failures name the offending field instead of leaking a
//! deserializer message.

use serde::Deserialize;

use super::error::TaskError;
use super::model::{TaskDraft, TaskPriority, TaskStatus};

/// Minimum accepted title length, in characters.
pub const TITLE_MIN_LEN: usize = 3;

/// Raw task payload as received on the wire.
///
/// Deserializing into this shape only fails on JSON syntax errors or a
/// non-object body; everything semantic is checked in [`Self::into_draft`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, rename = "dueDate")]
    pub due_date: Option<String>,
}

impl TaskPayload {
    /// Convert the raw payload into a validated [`TaskDraft`].
    ///
    /// Pure check, no side effects. Enum and date conversion runs before the
    /// field rules, so an unknown `status` token wins over a short title in
    /// the same payload. Field rules are checked in a fixed order and the
    /// first violation is returned.
    ///
    /// Omitted `status` and `priority` fall back to `PENDING` / `MEDIUM`;
    /// present-but-unknown tokens are rejected, never defaulted.
    pub fn into_draft(self) -> Result<TaskDraft, TaskError> {
        let status = match self.status.as_deref() {
            None => TaskStatus::default(),
            Some(token) => TaskStatus::parse(token).ok_or_else(|| {
                TaskError::malformed_field(
                    "status",
                    format!(
                        "Invalid value for 'status': '{}'. Allowed values: {}",
                        token,
                        TaskStatus::ALLOWED
                    ),
                )
            })?,
        };

        let priority = match self.priority.as_deref() {
            None => TaskPriority::default(),
            Some(token) => TaskPriority::parse(token).ok_or_else(|| {
                TaskError::malformed_field(
                    "priority",
                    format!(
                        "Invalid value for 'priority': '{}'. Allowed values: {}",
                        token,
                        TaskPriority::ALLOWED
                    ),
                )
            })?,
        };

        let due_date = match self.due_date.as_deref() {
            None => None,
            Some(raw) => Some(
                chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                    TaskError::malformed_field(
                        "dueDate",
                        format!("Invalid value for 'dueDate': '{raw}'. Expected YYYY-MM-DD"),
                    )
                })?,
            ),
        };

        let title = match self.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(TaskError::Validation("Title is required".to_string())),
        };
        if title.chars().count() < TITLE_MIN_LEN {
            return Err(TaskError::Validation(format!(
                "Title must be at least {TITLE_MIN_LEN} characters long"
            )));
        }

        let description = match self.description {
            Some(d) if !d.trim().is_empty() => d,
            _ => return Err(TaskError::Validation("Description is required".to_string())),
        };

        Ok(TaskDraft {
            title,
            description,
            status,
            priority,
            due_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_payload() -> TaskPayload {
        TaskPayload {
            title: Some("Learn Rust".to_string()),
            description: Some("Work through the async book".to_string()),
            status: Some("PENDING".to_string()),
            priority: Some("HIGH".to_string()),
            due_date: Some("2026-09-01".to_string()),
        }
    }

    #[test]
    fn valid_payload_converts() {
        let draft = valid_payload().into_draft().unwrap();
        assert_eq!(draft.title, "Learn Rust");
        assert_eq!(draft.status, TaskStatus::Pending);
        assert_eq!(draft.priority, TaskPriority::High);
        assert_eq!(
            draft.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
    }

    #[test]
    fn unknown_status_token_is_malformed_and_names_the_field() {
        let payload = TaskPayload {
            status: Some("INVALID_STATUS".to_string()),
            ..valid_payload()
        };
        match payload.into_draft().unwrap_err() {
            TaskError::Malformed { field, detail } => {
                assert_eq!(field.as_deref(), Some("status"));
                assert!(detail.contains("INVALID_STATUS"));
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn unknown_priority_token_is_malformed() {
        let payload = TaskPayload {
            priority: Some("URGENT".to_string()),
            ..valid_payload()
        };
        match payload.into_draft().unwrap_err() {
            TaskError::Malformed { field, detail } => {
                assert_eq!(field.as_deref(), Some("priority"));
                assert!(detail.contains("LOW, MEDIUM, HIGH"));
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn conversion_failures_win_over_field_rules() {
        // Title too short AND invalid status: the status failure surfaces,
        // matching binding-before-validation ordering.
        let payload = TaskPayload {
            title: Some("Hi".to_string()),
            description: Some(String::new()),
            status: Some("INVALID_STATUS".to_string()),
            ..valid_payload()
        };
        assert!(matches!(
            payload.into_draft().unwrap_err(),
            TaskError::Malformed { .. }
        ));
    }

    #[test]
    fn missing_title_is_first_violated_rule() {
        let payload = TaskPayload {
            title: None,
            description: Some(String::new()),
            ..valid_payload()
        };
        assert_eq!(
            payload.into_draft().unwrap_err(),
            TaskError::Validation("Title is required".to_string())
        );
    }

    #[test]
    fn short_title_is_rejected() {
        let payload = TaskPayload {
            title: Some("Hi".to_string()),
            ..valid_payload()
        };
        assert_eq!(
            payload.into_draft().unwrap_err(),
            TaskError::Validation("Title must be at least 3 characters long".to_string())
        );
    }

    #[test]
    fn blank_description_is_rejected() {
        let payload = TaskPayload {
            description: Some("   ".to_string()),
            ..valid_payload()
        };
        assert_eq!(
            payload.into_draft().unwrap_err(),
            TaskError::Validation("Description is required".to_string())
        );
    }

    #[test]
    fn omitted_enums_fall_back_to_defaults() {
        let payload = TaskPayload {
            status: None,
            priority: None,
            due_date: None,
            ..valid_payload()
        };
        let draft = payload.into_draft().unwrap();
        assert_eq!(draft.status, TaskStatus::Pending);
        assert_eq!(draft.priority, TaskPriority::Medium);
        assert_eq!(draft.due_date, None);
    }

    #[test]
    fn bad_due_date_is_malformed() {
        let payload = TaskPayload {
            due_date: Some("tomorrow".to_string()),
            ..valid_payload()
        };
        match payload.into_draft().unwrap_err() {
            TaskError::Malformed { field, .. } => assert_eq!(field.as_deref(), Some("dueDate")),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }
}
