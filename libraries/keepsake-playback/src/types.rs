//! Core types for playback sessions

use crate::time::ProgressDisplay;
use keepsake_core::{Asset, AssetId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Playlist is empty, nothing selected
    Empty,

    /// Track selected, device not playing (start pending, rejected, or autoplay off)
    Ready,

    /// Device confirmed playback
    Playing,

    /// User paused a track that was playing
    Paused,
}

impl SessionState {
    /// Whether a track is selected
    pub fn has_track(&self) -> bool {
        !matches!(self, SessionState::Empty)
    }
}

/// Configuration for a playback session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Try to start playback whenever the current track changes (default: true)
    pub autoplay: bool,

    /// Advance to the next track when the device reports the end (default: true)
    pub advance_on_end: bool,

    /// Clamp seeks to `[0, duration]` once duration is known (default: true)
    pub clamp_seek: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            advance_on_end: true,
            clamp_seek: true,
        }
    }
}

/// Device binding for one loaded track
///
/// Created every time the session loads a track, even when the same asset
/// is reloaded. Devices tag their events with the binding id so events
/// from a previous load can be told apart and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackBinding {
    id: u64,
    asset_id: AssetId,
}

impl TrackBinding {
    pub(crate) fn new(id: u64, asset_id: AssetId) -> Self {
        Self { id, asset_id }
    }

    /// Binding id, carried by every device event
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Asset this binding was created for
    pub fn asset_id(&self) -> &AssetId {
        &self.asset_id
    }
}

/// Tag for one playback-start request
///
/// Only the most recently issued ticket is honoured when the device reports
/// the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartTicket(pub(crate) u64);

impl StartTicket {
    /// Raw ticket number
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StartTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What became of a reported start outcome
#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    /// Device is playing the current track
    Started,

    /// Device refused; the session is in `Ready` and waits for `play()`
    Rejected(crate::PlaybackError),

    /// The ticket was superseded; nothing changed
    Stale,
}

/// Everything the rendering layer needs to draw the player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Session state
    pub state: SessionState,

    /// Index of the current track
    pub cursor: Option<usize>,

    /// Whether the device is playing
    pub playing: bool,

    /// Whether the device is muted
    pub muted: bool,

    /// Device-reported position in seconds
    pub position: f64,

    /// Device-reported duration in seconds (may be NaN before metadata loads)
    pub duration: f64,

    /// Current track
    pub current: Option<Asset>,

    /// Formatted elapsed/remaining time
    pub progress: ProgressDisplay,
}
