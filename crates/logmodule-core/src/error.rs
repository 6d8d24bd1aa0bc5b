//! Error types
//!
//! Backend errors are returned to the caller exactly as the backend produced
//! them; the dispatcher never wraps, retries or swallows them.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Channel;

/// Failure reported by a backend write
#[derive(Error, Debug)]
pub enum BackendError {
    /// The sink could not be reached
    #[error("Log sink unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the event
    #[error("Backend rejected {channel} event: {reason}")]
    Rejected { channel: Channel, reason: String },

    #[error("Log sink I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for backend writes
pub type BackendResult = std::result::Result<(), BackendError>;

/// Errors that can occur while loading [`crate::LogConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("Failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings document is not valid JSON or has the wrong shape
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// An override carried a value of the wrong type
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
