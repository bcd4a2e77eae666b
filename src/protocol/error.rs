//! Error types for client operations

use thiserror::Error;

/// Main error type for client operations
///
/// Transport-class failures (connection errors, timeouts, non-2xx statuses)
/// and format-class failures (bodies that are not valid JSON) are both fatal
/// to a run; neither is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level error (connection refused, DNS failure, etc.)
    #[error("transport error: {0}")]
    Transport(String),

    /// Request timeout
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("HTTP {status} response from server: {body}")]
    Http {
        /// The HTTP status code
        status: u16,

        /// Raw response body text, if any
        body: String,
    },

    /// Response body was not valid JSON
    #[error("invalid response body: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Transport(format!("connection error: {}", err))
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}
