// Rust guideline compliant 2026-02-06

//! Error types for the ghdocs core library.

use thiserror::Error;

/// Result type alias for ghdocs core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ghdocs core operations.
///
/// Matching never fails on data. Only configuration and IO surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
