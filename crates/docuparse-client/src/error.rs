//! Error types for DocuParse client operations

use thiserror::Error;

/// Result type alias for DocuParse client operations
pub type Result<T> = std::result::Result<T, DocuParseClientError>;

/// Errors that can occur during DocuParse client operations
#[derive(Error, Debug)]
pub enum DocuParseClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Server returned an error response
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request was rejected as invalid (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Request body failed validation (HTTP 422)
    #[error("Validation rejected: {0}")]
    ValidationRejected(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,
}

impl DocuParseClientError {
    /// Create a server error from status code and message
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }
}
