//! Custom error types for jpdb-export
//!
//! This module defines the error hierarchy for the exporter using thiserror.
//! Transport failures are classified so the retry loop can tell transient
//! conditions from fatal ones.

use std::time::Duration;

use thiserror::Error;

/// The main error type for jpdb-export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// Network-level failure (connection, timeout, TLS)
    #[error("Network error: {0}")]
    TransientNetwork(String),

    /// Server asked us to slow down (HTTP 429)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    /// API key rejected (HTTP 403 or an error body from ping)
    #[error("{0}")]
    AuthRejected(String),

    /// Request rejected by the server (HTTP 400)
    #[error("{0}")]
    BadRequest(String),

    /// Any other non-success status
    #[error("HTTP {status}{}", .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Http { status: u16, message: Option<String> },

    /// The retry budget for a single request was used up
    #[error("Exceeded maximum retries")]
    RetriesExhausted,

    /// Response body did not have the expected shape
    #[error("Unexpected {endpoint} response: {detail}")]
    UnexpectedResponse {
        endpoint: &'static str,
        detail: String,
    },

    /// The account has no decks to choose from
    #[error("No user decks found.")]
    NoDecks,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid or missing user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV writing errors
    #[error("Export error: {0}")]
    Export(String),

    /// Input closed or the user aborted
    #[error("Aborted by user.")]
    Interrupted,
}

impl ExportError {
    /// Create an "unexpected response" error for an endpoint
    pub fn unexpected(endpoint: &'static str, detail: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            endpoint,
            detail: detail.into(),
        }
    }

    /// Whether the transport should try the request again
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TransientNetwork(_) | Self::RateLimited { .. })
    }

    /// Whether this is a credential or request rejection from the server
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::AuthRejected(_) | Self::BadRequest(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for jpdb-export operations
pub type ExportResult<T> = Result<T, ExportError>;
