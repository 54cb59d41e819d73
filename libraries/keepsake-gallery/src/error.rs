//! Error types for the gallery catalog

use keepsake_core::ClientId;
use thiserror::Error;

/// Gallery errors
#[derive(Debug, Error)]
pub enum GalleryError {
    /// A load completed after a newer load (or another client) superseded it
    #[error("Stale load for client {client_id} (generation {generation})")]
    StaleLoad {
        /// Client the load was issued for
        client_id: ClientId,
        /// Generation of the superseded load
        generation: u64,
    },

    /// Unknown filter name
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

/// Result type for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;
