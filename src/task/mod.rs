//! Task domain: entity, payload validation, CRUD service, and storage.
//!
//! The pipeline is staged so each failure kind has exactly one producer:
//! - `payload` converts raw wire input into drafts (Malformed / Validation)
//! - `service` orchestrates CRUD against the store (NotFound / Internal)
//! - `store` never errors on a miss; absent rows are `None`

pub mod error;
pub mod model;
pub mod payload;
pub mod service;
pub mod store;

pub use error::TaskError;
pub use model::{Task, TaskDraft, TaskPriority, TaskStatus};
pub use payload::TaskPayload;
pub use service::TaskService;
pub use store::{create_task_store, TaskStore, TaskStoreKind};
