//! Error types for the API client.

use thiserror::Error;

/// API client error type.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed before a response was received.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// The server rejected the token. The local session has already been
    /// cleared by the time the caller sees this.
    #[error("{0}")]
    Unauthorized(String),

    /// A download returned something other than the expected content type.
    #[error("invalid file type received: {got}, expected {expected}")]
    InvalidContentType { expected: String, got: String },
}

impl Error {
    /// The message to show the user, as the server phrased it when possible.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;
