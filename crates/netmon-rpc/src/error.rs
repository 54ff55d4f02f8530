//! Error types for monitoring API calls.
//!
//! All errors implement `std::error::Error` via `thiserror`.

use thiserror::Error;

/// Result type alias for monitoring API operations.
pub type Result<T> = std::result::Result<T, RpcError>;

/// Errors that can occur while talking to the monitoring API.
#[derive(Debug, Error)]
pub enum RpcError {
    /// HTTP transport failed (connect, timeout, non-2xx status, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request or response body could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a JSON-RPC error object.
    #[error("API error {code}: {message} ({data})")]
    Api {
        /// JSON-RPC error code.
        code: i64,
        /// Short error message.
        message: String,
        /// Detailed error description.
        data: String,
    },

    /// The `result` member did not have the shape the wrapper expects.
    #[error("Unexpected result from {method}: {reason}")]
    UnexpectedResult {
        /// The API method that was called.
        method: String,
        /// What was wrong with the result.
        reason: String,
    },

    /// Fewer results than requested were affected.
    #[error("Expected {expected} results, got {got}")]
    ExpectedMore {
        /// Number of results requested.
        expected: usize,
        /// Number of results received.
        got: usize,
    },

    /// A call that needs a session token was made before `login`.
    #[error("Not logged in")]
    NotLoggedIn,

    /// Client configuration is invalid.
    #[error("Invalid configuration for {field}: {message}")]
    Config {
        /// The field that failed validation.
        field: String,
        /// Error message.
        message: String,
    },

    /// Reading the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RpcError {
    /// Creates an unexpected-result error.
    pub fn unexpected(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnexpectedResult {
            method: method.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient condition
    /// that may succeed on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            RpcError::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
