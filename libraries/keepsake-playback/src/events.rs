//! Session Events
//!
//! Event-based communication for UI synchronization.
//! Events are queued on every observable change and drained by the
//! rendering layer:
//! - State changes (ready/playing/paused/empty)
//! - Track changes
//! - Position and duration updates
//! - Mute changes
//! - Rejected playback starts

use crate::types::SessionState;
use keepsake_core::AssetId;
use serde::{Deserialize, Serialize};

/// Events emitted by a playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Session state changed
    StateChanged {
        /// The new state
        state: SessionState,
    },

    /// Current track changed (including reloads of the same index)
    TrackChanged {
        /// Index of the new current track
        index: usize,
        /// ID of the new current track
        asset_id: AssetId,
        /// ID of the previous track (if any)
        previous_asset_id: Option<AssetId>,
    },

    /// Position changed (device report or seek)
    PositionChanged {
        /// Position in seconds
        position: f64,
    },

    /// Duration changed
    DurationChanged {
        /// Duration in seconds
        duration: f64,
    },

    /// Mute toggled
    MuteChanged {
        /// Whether output is muted
        muted: bool,
    },

    /// Device refused to start playback
    StartRejected {
        /// Reason reported by the device
        reason: String,
    },
}
