//! Configuration management for taskforge.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `8080`.
//! - `TASK_STORE` - Optional. Store backend, `memory` or `sqlite`. Defaults to `sqlite`.
//! - `DATA_DIR` - Optional. Directory for the SQLite database. Defaults to `./data`.

use std::path::PathBuf;
use thiserror::Error;

use crate::task::TaskStoreKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Task store backend
    pub store_kind: TaskStoreKind,

    /// Directory the SQLite store keeps its database in
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let store_kind = std::env::var("TASK_STORE")
            .map(|s| TaskStoreKind::from_str(&s))
            .unwrap_or_default();

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        Ok(Self {
            host,
            port,
            store_kind,
            data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        // Direct construction mirrors what from_env produces with no vars set;
        // from_env itself is not exercised here to avoid cross-test env races.
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            store_kind: TaskStoreKind::default(),
            data_dir: PathBuf::from("./data"),
        };
        assert_eq!(config.store_kind, TaskStoreKind::Sqlite);
    }
}
