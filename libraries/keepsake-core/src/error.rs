/// Retrieval error types for Keepsake
use thiserror::Error;

/// Failure to retrieve one kind of asset list for a client.
///
/// Retrieval failures are never fatal: the gallery degrades the affected
/// collection to empty and the caller may retry with a fresh load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    /// Backend could not be reached (connect failure, timeout)
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Backend answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Response body could not be decoded into assets
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Backend rejected the request for lack of credentials
    #[error("Authentication required")]
    Unauthorized,

    /// Any other transport failure
    #[error("Retrieval failed: {0}")]
    Other(String),
}

impl RetrievalError {
    /// Whether retrying later could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Unreachable(_) => true,
            Self::Server { status, .. } => *status >= 500,
            Self::Malformed(_) | Self::Unauthorized | Self::Other(_) => false,
        }
    }
}
