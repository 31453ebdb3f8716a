// Rust guideline compliant 2026-02-09

//! Error handling for ghdocs application services.

use ghdocs_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for tool and resource responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested category, document or issue was not found.
    NotFound,
    /// Configuration failed validation.
    InvalidConfig,
    /// The request included invalid inputs.
    InvalidInput,
    /// The remote API answered with an error status.
    RemoteError,
    /// The remote API could not be reached.
    TransportError,
    /// A fetched file body could not be decoded.
    DecodeError,
    /// IO failure.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// A named entity could not be resolved.
    #[error("{kind} '{name}' not found. Did you mean: {}", format_suggestions(.suggestions))]
    NotFound {
        /// What was looked up (`Category`, `Document`, `Issue`).
        kind: String,
        /// Name as requested by the caller.
        name: String,
        /// Closest known names, best first.
        suggestions: Vec<String>,
    },

    /// A remote resource addressed by path or number does not exist.
    #[error("Remote resource not found: {0}")]
    RemoteNotFound(String),

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The remote API returned a non-success status.
    #[error("Remote API error ({status}): {message}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// File content was not valid base64 or UTF-8.
    #[error("Failed to decode content of {path}: {reason}")]
    Decode {
        /// Path of the offending file.
        path: String,
        /// Why decoding failed.
        reason: String,
    },

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// JSON error not represented by core errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

/// Renders a suggestion list for "did you mean" messages.
///
/// An empty list renders as `(no suggestions)`.
#[must_use]
pub fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        "(no suggestions)".to_string()
    } else {
        suggestions.join(", ")
    }
}

impl AppError {
    /// Builds a not-found error for a named entity.
    #[must_use]
    pub fn not_found(kind: &str, name: &str, suggestions: Vec<String>) -> Self {
        AppError::NotFound {
            kind: kind.to_string(),
            name: name.to_string(),
            suggestions,
        }
    }

    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { .. } | AppError::RemoteNotFound(_) => ErrorCode::NotFound,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Remote { .. } => ErrorCode::RemoteError,
            AppError::Transport(_) => ErrorCode::TransportError,
            AppError::Decode { .. } => ErrorCode::DecodeError,
            AppError::Json(_) => ErrorCode::JsonError,
            AppError::Core(core) => match core {
                CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::NotFound {
                kind,
                name,
                suggestions,
            } => Some(serde_json::json!({
                "kind": kind,
                "name": name,
                "suggestions": suggestions,
            })),
            AppError::Remote { status, .. } => Some(serde_json::json!({
                "status": status,
            })),
            AppError::Decode { path, .. } => Some(serde_json::json!({
                "path": path,
            })),
            _ => None,
        }
    }

    /// Returns whether retrying the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Transport(_) => true,
            AppError::Remote { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
