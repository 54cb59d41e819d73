//! Platform-agnostic playback device trait
//!
//! Abstracts the single audio output the session drives (an HTML audio
//! element, a native player, a test double).

use crate::types::{StartTicket, TrackBinding};

/// Playback device driven by a [`PlaybackSession`](crate::PlaybackSession)
///
/// Calls flow one way: the session issues commands here, the device reports
/// back through [`DeviceEvent`]s and start outcomes. Implementations must
/// not call back into the session synchronously from these methods.
pub trait PlaybackDevice {
    /// Load `locator` and start delivering events tagged with `binding`
    fn bind(&mut self, binding: &TrackBinding, locator: &str);

    /// Stop delivering events for `binding`
    ///
    /// Called before every new `bind`, and when the playlist empties.
    fn release(&mut self, binding: &TrackBinding);

    /// Request playback start
    ///
    /// Asynchronous: the outcome is reported later through
    /// [`PlaybackSession::on_start_result`](crate::PlaybackSession::on_start_result)
    /// with the same `ticket`.
    fn play(&mut self, ticket: StartTicket);

    /// Pause playback
    fn pause(&mut self);

    /// Move the playhead
    fn set_current_time(&mut self, seconds: f64);

    /// Mute or unmute output
    fn set_muted(&mut self, muted: bool);
}

/// Event emitted by a device for one binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceEvent {
    /// Binding id the device was serving when it emitted the event
    pub binding: u64,

    /// What happened
    pub kind: DeviceEventKind,
}

impl DeviceEvent {
    /// Tag `kind` with `binding`
    pub fn new(binding: &TrackBinding, kind: DeviceEventKind) -> Self {
        Self {
            binding: binding.id(),
            kind,
        }
    }
}

/// Device-originated reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceEventKind {
    /// Playhead moved (seconds)
    TimeUpdate(f64),

    /// Track duration became known (seconds, may be non-finite for streams)
    DurationChange(f64),

    /// Track played to the end
    Ended,
}

/// Call recorded by [`RecordingDevice`]
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    Bind { binding: u64, locator: String },
    Release { binding: u64 },
    Play(StartTicket),
    Pause,
    SetCurrentTime(f64),
    SetMuted(bool),
}

/// Device double that records every command
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingDevice {
    pub calls: Vec<DeviceCall>,
}

#[cfg(test)]
impl RecordingDevice {
    /// Tickets passed to `play`, in order
    pub fn play_tickets(&self) -> Vec<StartTicket> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DeviceCall::Play(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    /// Locators passed to `bind`, in order
    pub fn bound_locators(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DeviceCall::Bind { locator, .. } => Some(locator.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl PlaybackDevice for RecordingDevice {
    fn bind(&mut self, binding: &TrackBinding, locator: &str) {
        self.calls.push(DeviceCall::Bind {
            binding: binding.id(),
            locator: locator.to_string(),
        });
    }

    fn release(&mut self, binding: &TrackBinding) {
        self.calls.push(DeviceCall::Release {
            binding: binding.id(),
        });
    }

    fn play(&mut self, ticket: StartTicket) {
        self.calls.push(DeviceCall::Play(ticket));
    }

    fn pause(&mut self) {
        self.calls.push(DeviceCall::Pause);
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.calls.push(DeviceCall::SetCurrentTime(seconds));
    }

    fn set_muted(&mut self, muted: bool) {
        self.calls.push(DeviceCall::SetMuted(muted));
    }
}
