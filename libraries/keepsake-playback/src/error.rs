//! Error types for playback sessions

use thiserror::Error;

/// Playback errors
///
/// None of these are fatal; they are reported to the caller for display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// Requested track index is outside the playlist
    #[error("Track index {index} out of range (playlist has {len} tracks)")]
    OutOfRange { index: usize, len: usize },

    /// Device refused to start playback (typically autoplay policy)
    #[error("Playback start rejected: {0}")]
    PlaybackStartRejected(String),

    /// Seek target is negative, infinite or not a number
    #[error("Invalid seek position: {0}")]
    InvalidSeekPosition(f64),

    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
