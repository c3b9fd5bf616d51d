//! HTTP API for taskforge.
//!
//! ## Endpoints
//!
//! - `POST /api/tasks` - Create a task
//! - `GET /api/tasks` - List all tasks
//! - `GET /api/tasks/{id}` - Get a task by id
//! - `PUT /api/tasks/{id}` - Overwrite a task's fields
//! - `DELETE /api/tasks/{id}` - Delete a task
//! - `GET /api/health` - Health check
//!
//! Failures surface as plain-text responses produced by [`error::ApiError`],
//! the single mapping point from the domain taxonomy to HTTP.

mod error;
pub mod routes;
pub mod tasks;
pub mod types;

pub use error::ApiError;
pub use routes::serve;
