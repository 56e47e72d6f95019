//! Station repository error types.

/// Errors that can occur when talking to the stations backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    ///
    /// Status 0 marks failures that never reached the backend.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl ClientError {
    /// HTTP status reported by the backend, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Api { status: 0, .. } => None,
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Json { .. } => None,
        }
    }
}
