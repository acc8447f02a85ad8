//! Error types for host-services
//!
//! Provides error types used throughout the host-services crate.

use thiserror::Error;

/// Service error type
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path rejected: {0}")]
    Path(String),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
