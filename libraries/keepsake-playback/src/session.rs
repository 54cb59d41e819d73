//! Playback session - playlist transport over one device
//!
//! Owns the "now playing" cursor over the audio collection and keeps
//! position/duration in sync with the device without feeding device
//! reports back into device commands.

use crate::{
    device::{DeviceEvent, DeviceEventKind, PlaybackDevice},
    error::{PlaybackError, Result},
    events::SessionEvent,
    time::ProgressDisplay,
    types::{SessionConfig, SessionSnapshot, SessionState, StartOutcome, StartTicket, TrackBinding},
};
use keepsake_core::Asset;
use std::sync::Arc;
use tracing::{debug, warn};

/// Playlist playback session
///
/// Drives a single [`PlaybackDevice`]:
/// - Cursor over the track sequence with wrap-around next/previous
/// - Asynchronous playback start with stale-completion guard
/// - Pause, seek, mute
/// - Position/duration mirrored from device reports
///
/// The track sequence is read-only here. Replace it with
/// [`on_tracks_changed`](Self::on_tracks_changed); passing the same `Arc`
/// again is a no-op, any other `Arc` resets the cursor to the first track.
pub struct PlaybackSession<D: PlaybackDevice> {
    device: D,
    config: SessionConfig,

    // Playlist
    tracks: Arc<[Asset]>,
    cursor: Option<usize>,

    // Observable state
    state: SessionState,
    muted: bool,
    position: f64,
    duration: f64,
    last_error: Option<PlaybackError>,

    // Device bookkeeping
    binding: Option<TrackBinding>,
    next_binding_id: u64,
    pending_start: Option<StartTicket>,
    next_ticket: u64,

    // Event queue for UI synchronization
    pending_events: Vec<SessionEvent>,
}

impl<D: PlaybackDevice> PlaybackSession<D> {
    /// Create an empty session driving `device`
    pub fn new(device: D, config: SessionConfig) -> Self {
        Self {
            device,
            config,
            tracks: Arc::from(Vec::<Asset>::new()),
            cursor: None,
            state: SessionState::Empty,
            muted: false,
            position: 0.0,
            duration: 0.0,
            last_error: None,
            binding: None,
            next_binding_id: 0,
            pending_start: None,
            next_ticket: 0,
            pending_events: Vec::new(),
        }
    }

    // ===== Playlist =====

    /// Replace the track sequence.
    ///
    /// An empty sequence moves the session to `Empty`. Otherwise the cursor
    /// resets to 0 and the first track is loaded (and started, if autoplay
    /// is on). Returns the start ticket handed to the device, if any.
    pub fn on_tracks_changed(&mut self, tracks: Arc<[Asset]>) -> Option<StartTicket> {
        if Arc::ptr_eq(&self.tracks, &tracks) {
            return None;
        }

        debug!(tracks = tracks.len(), "Track sequence replaced");
        self.tracks = tracks;

        if self.tracks.is_empty() {
            self.clear();
            None
        } else {
            self.load_track(0)
        }
    }

    /// Make track `index` current and start it.
    ///
    /// Position and duration reset to zero until the device reports.
    ///
    /// # Errors
    /// Returns [`PlaybackError::OutOfRange`] (and changes nothing) if
    /// `index` is not within the playlist.
    pub fn select_track(&mut self, index: usize) -> Result<Option<StartTicket>> {
        if index >= self.tracks.len() {
            return Err(PlaybackError::OutOfRange {
                index,
                len: self.tracks.len(),
            });
        }
        Ok(self.load_track(index))
    }

    /// Skip to the next track, wrapping to the first
    pub fn next(&mut self) -> Option<StartTicket> {
        let len = self.tracks.len();
        let cursor = self.cursor?;
        self.load_track((cursor + 1) % len)
    }

    /// Go back to the previous track, wrapping to the last
    pub fn previous(&mut self) -> Option<StartTicket> {
        let len = self.tracks.len();
        let cursor = self.cursor?;
        self.load_track((cursor + len - 1) % len)
    }

    // ===== Transport =====

    /// Request playback of the current track.
    ///
    /// No-op when the playlist is empty, the device is already playing, or
    /// a start request is still outstanding.
    pub fn play(&mut self) -> Option<StartTicket> {
        if !self.state.has_track() || self.state == SessionState::Playing {
            return None;
        }
        if self.pending_start.is_some() {
            return None;
        }
        Some(self.request_start())
    }

    /// Pause playback.
    ///
    /// Also cancels an outstanding start request: its completion will be
    /// ignored. No-op when empty or already stopped.
    pub fn pause(&mut self) {
        if !self.state.has_track() {
            return;
        }
        if self.state != SessionState::Playing && self.pending_start.is_none() {
            return;
        }

        self.pending_start = None;
        self.device.pause();
        self.set_state(SessionState::Paused);
    }

    /// Move the playhead to `seconds`.
    ///
    /// The reported position updates immediately, without waiting for the
    /// device. Returns the position actually applied.
    ///
    /// # Errors
    /// - [`PlaybackError::InvalidSeekPosition`] for negative or non-finite targets
    /// - [`PlaybackError::NoTrackLoaded`] when the playlist is empty
    pub fn seek(&mut self, seconds: f64) -> Result<f64> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(PlaybackError::InvalidSeekPosition(seconds));
        }
        if !self.state.has_track() {
            return Err(PlaybackError::NoTrackLoaded);
        }

        let target = if self.config.clamp_seek && self.duration.is_finite() && self.duration > 0.0
        {
            seconds.min(self.duration)
        } else {
            seconds
        };

        self.device.set_current_time(target);
        self.set_position(target);
        Ok(target)
    }

    /// Flip the mute flag. Returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.device.set_muted(self.muted);
        self.pending_events.push(SessionEvent::MuteChanged { muted: self.muted });
        self.muted
    }

    // ===== Device reports =====

    /// Record the outcome of a start request.
    ///
    /// Outcomes for any ticket other than the outstanding one are ignored,
    /// so a slow device cannot revive a track the user already left.
    /// A rejection is not raised: the session stays `Ready` and the error
    /// is kept in [`last_error`](Self::last_error).
    pub fn on_start_result(
        &mut self,
        ticket: StartTicket,
        result: std::result::Result<(), String>,
    ) -> StartOutcome {
        if self.pending_start != Some(ticket) {
            debug!(ticket = %ticket, "Ignoring stale start result");
            return StartOutcome::Stale;
        }
        self.pending_start = None;

        match result {
            Ok(()) => {
                self.last_error = None;
                self.set_state(SessionState::Playing);
                StartOutcome::Started
            }
            Err(reason) => {
                warn!(ticket = %ticket, reason = %reason, "Playback start rejected");
                let error = PlaybackError::PlaybackStartRejected(reason.clone());
                self.last_error = Some(error.clone());
                self.set_state(SessionState::Ready);
                self.pending_events
                    .push(SessionEvent::StartRejected { reason });
                StartOutcome::Rejected(error)
            }
        }
    }

    /// Dispatch a device event.
    ///
    /// Events tagged with any binding other than the current one are
    /// dropped. Returns the start ticket if the event advanced the playlist.
    pub fn handle_device_event(&mut self, event: DeviceEvent) -> Option<StartTicket> {
        match event.kind {
            DeviceEventKind::TimeUpdate(t) => {
                self.on_device_time_update(event.binding, t);
                None
            }
            DeviceEventKind::DurationChange(d) => {
                self.on_device_duration_known(event.binding, d);
                None
            }
            DeviceEventKind::Ended => self.on_device_ended(event.binding),
        }
    }

    /// Device reported the playhead position. Never issues device calls.
    ///
    /// Returns whether the report was applied.
    pub fn on_device_time_update(&mut self, binding: u64, seconds: f64) -> bool {
        if !self.is_current_binding(binding) || !seconds.is_finite() {
            return false;
        }
        self.set_position(seconds.max(0.0));
        true
    }

    /// Device reported the track duration. Never issues device calls.
    ///
    /// Non-finite values are stored as-is and rendered as a placeholder.
    pub fn on_device_duration_known(&mut self, binding: u64, seconds: f64) -> bool {
        if !self.is_current_binding(binding) {
            return false;
        }
        self.duration = seconds;
        self.pending_events
            .push(SessionEvent::DurationChanged { duration: seconds });
        true
    }

    /// Device reported the end of the current track.
    ///
    /// Advances to the next track when `advance_on_end` is set, otherwise
    /// the session settles in `Paused` at the end position.
    pub fn on_device_ended(&mut self, binding: u64) -> Option<StartTicket> {
        if !self.is_current_binding(binding) {
            return None;
        }
        if self.config.advance_on_end {
            self.next()
        } else {
            self.pending_start = None;
            self.set_state(SessionState::Paused);
            None
        }
    }

    // ===== Getters =====

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Index of the current track (`None` when empty)
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Current track
    pub fn current_track(&self) -> Option<&Asset> {
        self.cursor.and_then(|i| self.tracks.get(i))
    }

    /// Track sequence
    pub fn tracks(&self) -> &[Asset] {
        &self.tracks
    }

    /// Whether the device confirmed playback
    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Whether a start request is outstanding
    pub fn is_starting(&self) -> bool {
        self.pending_start.is_some()
    }

    /// Whether output is muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Position in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Duration in seconds (0 until known, may be non-finite)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Formatted elapsed/remaining time
    pub fn progress(&self) -> ProgressDisplay {
        ProgressDisplay::new(self.position, self.duration)
    }

    /// Most recent rejected start, cleared by the next successful one
    pub fn last_error(&self) -> Option<&PlaybackError> {
        self.last_error.as_ref()
    }

    /// Binding of the loaded track
    pub fn binding(&self) -> Option<&TrackBinding> {
        self.binding.as_ref()
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Underlying device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Underlying device (mutable)
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Full observable state for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            cursor: self.cursor,
            playing: self.is_playing(),
            muted: self.muted,
            position: self.position,
            duration: self.duration,
            current: self.current_track().cloned(),
            progress: self.progress(),
        }
    }

    // ===== Events =====

    /// Take all queued events
    ///
    /// The UI should call this after each batch of commands or device
    /// reports to synchronize with the session.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Bind track `index` on the device and (maybe) start it.
    ///
    /// `index` must be in range.
    fn load_track(&mut self, index: usize) -> Option<StartTicket> {
        let tracks = Arc::clone(&self.tracks);
        let asset = &tracks[index];
        let previous_asset_id = self.current_track().map(|a| a.id.clone());

        self.release_binding();
        self.pending_start = None;

        self.next_binding_id += 1;
        let binding = TrackBinding::new(self.next_binding_id, asset.id.clone());
        self.device.bind(&binding, &asset.locator);
        self.binding = Some(binding);

        debug!(index, asset_id = %asset.id, "Loading track");
        self.cursor = Some(index);
        self.pending_events.push(SessionEvent::TrackChanged {
            index,
            asset_id: asset.id.clone(),
            previous_asset_id,
        });

        self.set_position(0.0);
        self.duration = 0.0;
        self.pending_events
            .push(SessionEvent::DurationChanged { duration: 0.0 });
        self.set_state(SessionState::Ready);

        if self.config.autoplay {
            Some(self.request_start())
        } else {
            None
        }
    }

    fn request_start(&mut self) -> StartTicket {
        self.next_ticket += 1;
        let ticket = StartTicket(self.next_ticket);
        self.pending_start = Some(ticket);
        debug!(ticket = %ticket, cursor = ?self.cursor, "Requesting playback start");
        self.device.play(ticket);
        ticket
    }

    fn clear(&mut self) {
        self.release_binding();
        self.pending_start = None;
        self.cursor = None;
        self.set_position(0.0);
        self.duration = 0.0;
        self.set_state(SessionState::Empty);
    }

    fn release_binding(&mut self) {
        if let Some(binding) = self.binding.take() {
            self.device.release(&binding);
        }
    }

    fn is_current_binding(&self, binding: u64) -> bool {
        let current = self.binding.as_ref().map(TrackBinding::id) == Some(binding);
        if !current {
            debug!(binding, "Dropping event from stale binding");
        }
        current
    }

    fn set_position(&mut self, position: f64) {
        self.position = position;
        self.pending_events
            .push(SessionEvent::PositionChanged { position });
    }

    fn set_state(&mut self, state: SessionState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(SessionEvent::StateChanged { state });
        }
    }
}

impl<D: PlaybackDevice + Default> Default for PlaybackSession<D> {
    fn default() -> Self {
        Self::new(D::default(), SessionConfig::default())
    }
}
