//! Keepsake - Playback Session
//!
//! Platform-agnostic playlist playback for a client's audio collection.
//!
//! This crate provides:
//! - "Now playing" cursor with wrap-around next/previous
//! - Asynchronous playback start guarded against stale completions
//! - Pause, seek (clamped once duration is known), mute
//! - Position/duration mirrored from the device, one way only
//! - `m:ss` elapsed/remaining display
//!
//! # Architecture
//!
//! `keepsake-playback` owns no audio output. The host supplies a
//! [`PlaybackDevice`] and feeds its reports back into the session:
//!
//! - Commands go session → device (`bind`, `play`, `pause`, ...)
//! - Reports go device → session ([`DeviceEvent`], start outcomes)
//!
//! Every loaded track gets a fresh [`TrackBinding`] and every start
//! request a fresh [`StartTicket`]; reports carrying an outdated binding or
//! ticket are dropped.
//!
//! # Example
//!
//! ```rust
//! use keepsake_core::{Asset, AssetKind};
//! use keepsake_playback::{
//!     DeviceEvent, DeviceEventKind, PlaybackDevice, PlaybackSession, SessionConfig,
//!     SessionState, StartTicket, TrackBinding,
//! };
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct NullDevice {
//!     started: Vec<StartTicket>,
//! }
//!
//! impl PlaybackDevice for NullDevice {
//!     fn bind(&mut self, _binding: &TrackBinding, _locator: &str) {}
//!     fn release(&mut self, _binding: &TrackBinding) {}
//!     fn play(&mut self, ticket: StartTicket) {
//!         self.started.push(ticket);
//!     }
//!     fn pause(&mut self) {}
//!     fn set_current_time(&mut self, _seconds: f64) {}
//!     fn set_muted(&mut self, _muted: bool) {}
//! }
//!
//! let mut session = PlaybackSession::new(NullDevice::default(), SessionConfig::default());
//!
//! let tracks: Arc<[Asset]> = vec![
//!     Asset::new("1", AssetKind::Audio, "Intro", "https://cdn/1.mp3"),
//!     Asset::new("2", AssetKind::Audio, "Vows", "https://cdn/2.mp3"),
//! ]
//! .into();
//!
//! // Loading a playlist selects the first track and asks the device to start
//! let ticket = session.on_tracks_changed(tracks).unwrap();
//! session.on_start_result(ticket, Ok(()));
//! assert_eq!(session.state(), SessionState::Playing);
//!
//! // Device reports flow back in
//! let binding = session.binding().unwrap().clone();
//! session.handle_device_event(DeviceEvent::new(&binding, DeviceEventKind::DurationChange(185.0)));
//! session.handle_device_event(DeviceEvent::new(&binding, DeviceEventKind::TimeUpdate(62.0)));
//! assert_eq!(session.progress().elapsed, "1:02");
//! assert_eq!(session.progress().remaining, "2:03");
//!
//! // Skip ahead; reports for the old binding no longer apply
//! session.next();
//! assert_eq!(session.cursor(), Some(1));
//! session.handle_device_event(DeviceEvent::new(&binding, DeviceEventKind::TimeUpdate(90.0)));
//! assert_eq!(session.position(), 0.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod device;
mod error;
pub mod events;
mod session;
pub mod time;
pub mod types;

// Public exports
pub use device::{DeviceEvent, DeviceEventKind, PlaybackDevice};
pub use error::{PlaybackError, Result};
pub use events::SessionEvent;
pub use session::PlaybackSession;
pub use time::{format_time, ProgressDisplay, TIME_PLACEHOLDER};
pub use types::{
    SessionConfig, SessionSnapshot, SessionState, StartOutcome, StartTicket, TrackBinding,
};
