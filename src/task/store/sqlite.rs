//! SQLite-based task store.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;

use super::TaskStore;
use crate::task::model::{Task, TaskDraft, TaskPriority, TaskStatus};

// AUTOINCREMENT keeps the rowid sequence monotonic, so identities of deleted
// tasks are never reused.
const SCHEMA: &str = r#"
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    status TEXT NOT NULL,
    priority TEXT NOT NULL,
    due_date TEXT
);
"#;

pub struct SqliteTaskStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteTaskStore {
    /// Open (or create) the task database at `<data_dir>/tasks.db`.
    pub async fn new(data_dir: PathBuf) -> Result<Self, String> {
        tokio::fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| format!("Failed to create data dir: {}", e))?;
        let db_path = data_dir.join("tasks.db");

        let conn = tokio::task::spawn_blocking(move || {
            let conn = Connection::open(&db_path)
                .map_err(|e| format!("Failed to open SQLite database: {}", e))?;
            conn.execute_batch(SCHEMA)
                .map_err(|e| format!("Failed to run schema: {}", e))?;
            Ok::<_, String>(conn)
        })
        .await
        .map_err(|e| format!("Task join error: {}", e))??;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let status_str: String = row.get(3)?;
    let priority_str: String = row.get(4)?;
    let due_date_str: Option<String> = row.get(5)?;

    // A persisted token outside the closed sets is data corruption, not
    // something to default over.
    let status = TaskStatus::parse(&status_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(3, "status".to_string(), rusqlite::types::Type::Text)
    })?;
    let priority = TaskPriority::parse(&priority_str).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(4, "priority".to_string(), rusqlite::types::Type::Text)
    })?;
    let due_date = match due_date_str {
        None => None,
        Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                5,
                "due_date".to_string(),
                rusqlite::types::Type::Text,
            )
        })?),
    };

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status,
        priority,
        due_date,
    })
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    fn is_persistent(&self) -> bool {
        true
    }

    async fn insert(&self, draft: TaskDraft) -> Result<Task, String> {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            conn.execute(
                "INSERT INTO tasks (title, description, status, priority, due_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    draft.title,
                    draft.description,
                    draft.status.as_str(),
                    draft.priority.as_str(),
                    draft.due_date.map(|d| d.to_string()),
                ],
            )
            .map_err(|e| e.to_string())?;

            let id = conn.last_insert_rowid();
            Ok(draft.into_task(id))
        })
        .await
        .map_err(|e| e.to_string())?
    }

    async fn update(&self, task: &Task) -> Result<(), String> {
        let conn = self.conn.clone();
        let task = task.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            let changed = conn
                .execute(
                    "UPDATE tasks
                     SET title = ?1, description = ?2, status = ?3, priority = ?4, due_date = ?5
                     WHERE id = ?6",
                    params![
                        task.title,
                        task.description,
                        task.status.as_str(),
                        task.priority.as_str(),
                        task.due_date.map(|d| d.to_string()),
                        task.id,
                    ],
                )
                .map_err(|e| e.to_string())?;

            if changed == 0 {
                return Err(format!("Task {} not in store", task.id));
            }
            Ok(())
        })
        .await
        .map_err(|e| e.to_string())?
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, String> {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            conn.query_row(
                "SELECT id, title, description, status, priority, due_date
                 FROM tasks WHERE id = ?1",
                params![id],
                row_to_task,
            )
            .optional()
            .map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| e.to_string())?
    }

    async fn find_all(&self) -> Result<Vec<Task>, String> {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            let mut stmt = conn
                .prepare(
                    "SELECT id, title, description, status, priority, due_date
                     FROM tasks ORDER BY id",
                )
                .map_err(|e| e.to_string())?;

            let tasks = stmt
                .query_map([], row_to_task)
                .map_err(|e| e.to_string())?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| e.to_string())?;

            Ok(tasks)
        })
        .await
        .map_err(|e| e.to_string())?
    }

    async fn delete(&self, id: i64) -> Result<bool, String> {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let conn = conn.blocking_lock();
            let removed = conn
                .execute("DELETE FROM tasks WHERE id = ?1", params![id])
                .map_err(|e| e.to_string())?;
            Ok(removed > 0)
        })
        .await
        .map_err(|e| e.to_string())?
    }
}
