//! Error types for the Keepsake server client.

use keepsake_core::RetrievalError;
use thiserror::Error;

/// Errors that can occur when talking to the album backend.
#[derive(Error, Debug)]
pub enum ServerClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Client id cannot be used as a path segment
    #[error("Invalid client id: {0:?}")]
    InvalidClientId(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Credential store could not be read or written
    #[error("Credential store error: {0}")]
    CredentialStore(String),

    /// IO error in the credential store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server client operations.
pub type Result<T> = std::result::Result<T, ServerClientError>;

impl From<ServerClientError> for RetrievalError {
    fn from(err: ServerClientError) -> Self {
        match err {
            ServerClientError::ServerUnreachable(msg) => RetrievalError::Unreachable(msg),
            ServerClientError::ServerError { status: 401 | 403, .. } => {
                RetrievalError::Unauthorized
            }
            ServerClientError::ServerError { status, message } => {
                RetrievalError::Server { status, message }
            }
            ServerClientError::ParseError(msg) => RetrievalError::Malformed(msg),
            other => RetrievalError::Other(other.to_string()),
        }
    }
}
