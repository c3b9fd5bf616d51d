//! API response types not tied to a single resource.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Active task store backend ("memory" or "sqlite")
    pub store: String,
}
