//! Headless playlist preview
//!
//! [`ClockDevice`] stands in for an audio element: it "plays" by advancing
//! a clock on every tick and reports back the way a real device would.

use crate::error::{CliError, Result};
use keepsake_core::Asset;
use keepsake_playback::{
    DeviceEvent, DeviceEventKind, PlaybackDevice, PlaybackSession, SessionEvent, StartTicket,
    TrackBinding,
};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Report queued by [`ClockDevice`] for the session
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceReport {
    Event(DeviceEvent),
    Start(StartTicket, std::result::Result<(), String>),
}

/// Check a simulated track length: finite and positive
pub fn validate_track_seconds(seconds: f64) -> Result<f64> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(CliError::InvalidArgument(format!(
            "track length must be a positive number of seconds, got {seconds}"
        )))
    }
}

/// clap value parser for `--track-seconds`
pub fn parse_track_seconds(arg: &str) -> std::result::Result<f64, String> {
    let seconds: f64 = arg.trim().parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    validate_track_seconds(seconds).map_err(|e| e.to_string())
}

/// Device that plays every track for a fixed length of simulated time
#[derive(Debug)]
pub struct ClockDevice {
    track_seconds: f64,
    binding: Option<TrackBinding>,
    playing: bool,
    muted: bool,
    position: f64,
    outbox: VecDeque<DeviceReport>,
}

impl ClockDevice {
    pub fn new(track_seconds: f64) -> Self {
        Self {
            track_seconds,
            binding: None,
            playing: false,
            muted: false,
            position: 0.0,
            outbox: VecDeque::new(),
        }
    }

    /// Advance the clock by `elapsed` seconds
    pub fn tick(&mut self, elapsed: f64) {
        let Some(binding) = self.binding.as_ref().filter(|_| self.playing) else {
            return;
        };

        self.position = (self.position + elapsed).min(self.track_seconds);
        let mut reports = vec![DeviceEventKind::TimeUpdate(self.position)];
        if self.position >= self.track_seconds {
            self.playing = false;
            reports.push(DeviceEventKind::Ended);
        }

        for kind in reports {
            self.outbox
                .push_back(DeviceReport::Event(DeviceEvent::new(binding, kind)));
        }
    }

    /// Take queued reports
    pub fn drain(&mut self) -> Vec<DeviceReport> {
        self.outbox.drain(..).collect()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl PlaybackDevice for ClockDevice {
    fn bind(&mut self, binding: &TrackBinding, locator: &str) {
        debug!(binding = binding.id(), locator, "Clock device bound");
        self.binding = Some(binding.clone());
        self.playing = false;
        self.position = 0.0;
        // Metadata is "loaded" as soon as the source is set
        self.outbox.push_back(DeviceReport::Event(DeviceEvent::new(
            binding,
            DeviceEventKind::DurationChange(self.track_seconds),
        )));
    }

    fn release(&mut self, binding: &TrackBinding) {
        if self.binding.as_ref() == Some(binding) {
            self.binding = None;
            self.playing = false;
        }
    }

    fn play(&mut self, ticket: StartTicket) {
        let result = if self.binding.is_some() {
            self.playing = true;
            Ok(())
        } else {
            Err("no source loaded".to_string())
        };
        self.outbox.push_back(DeviceReport::Start(ticket, result));
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.track_seconds);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

/// Preview pacing
#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions {
    /// Wall-clock length of the preview
    pub total: Duration,
    /// Interval between device clock ticks
    pub tick: Duration,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            total: Duration::from_secs(10),
            tick: Duration::from_millis(250),
        }
    }
}

/// Feed every queued device report into the session
pub fn pump(session: &mut PlaybackSession<ClockDevice>) {
    loop {
        let reports = session.device_mut().drain();
        if reports.is_empty() {
            break;
        }
        for report in reports {
            match report {
                DeviceReport::Event(event) => {
                    session.handle_device_event(event);
                }
                DeviceReport::Start(ticket, result) => {
                    session.on_start_result(ticket, result);
                }
            }
        }
    }
}

/// Play `tracks` on `session` for `options.total`, handing every session
/// event to `on_event`.
pub async fn run_preview<F>(
    session: &mut PlaybackSession<ClockDevice>,
    tracks: Arc<[Asset]>,
    options: PreviewOptions,
    mut on_event: F,
) where
    F: FnMut(&SessionEvent),
{
    session.on_tracks_changed(tracks);
    pump(session);
    session.drain_events().iter().for_each(&mut on_event);

    let ticks = (options.total.as_secs_f64() / options.tick.as_secs_f64()).ceil() as u64;
    let mut interval = tokio::time::interval(options.tick);
    // First tick completes immediately
    interval.tick().await;

    for _ in 0..ticks {
        interval.tick().await;
        session.device_mut().tick(options.tick.as_secs_f64());
        pump(session);
        session.drain_events().iter().for_each(&mut on_event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_core::AssetKind;
    use keepsake_playback::{SessionConfig, SessionState};

    fn tracks(n: usize) -> Arc<[Asset]> {
        (0..n)
            .map(|i| Asset::new(i.to_string(), AssetKind::Audio, format!("t{i}"), "mem://"))
            .collect()
    }

    fn session(track_seconds: f64) -> PlaybackSession<ClockDevice> {
        PlaybackSession::new(ClockDevice::new(track_seconds), SessionConfig::default())
    }

    #[test]
    fn autoplay_starts_and_reports_duration() {
        let mut session = session(2.0);
        session.on_tracks_changed(tracks(2));
        pump(&mut session);

        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.duration(), 2.0);
        assert!(session.device().is_playing());
    }

    #[test]
    fn end_of_track_advances() {
        let mut session = session(1.0);
        session.on_tracks_changed(tracks(2));
        pump(&mut session);

        session.device_mut().tick(0.5);
        pump(&mut session);
        assert_eq!(session.position(), 0.5);

        session.device_mut().tick(0.5);
        pump(&mut session);
        assert_eq!(session.cursor(), Some(1));
        assert_eq!(session.position(), 0.0);
        assert!(session.is_playing());
    }

    #[test]
    fn paused_device_does_not_advance() {
        let mut session = session(1.0);
        session.on_tracks_changed(tracks(1));
        pump(&mut session);
        session.pause();

        session.device_mut().tick(5.0);
        pump(&mut session);
        assert_eq!(session.position(), 0.0);
        assert_eq!(session.state(), SessionState::Paused);
    }

    #[test]
    fn track_length_must_be_finite_and_positive() {
        assert_eq!(validate_track_seconds(2.5).unwrap(), 2.5);
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_track_seconds(bad),
                Err(CliError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn track_seconds_argument_parsing() {
        assert_eq!(parse_track_seconds("3"), Ok(3.0));
        assert!(parse_track_seconds("0").is_err());
        assert!(parse_track_seconds("-2").is_err());
        assert!(parse_track_seconds("NaN").is_err());
        assert!(parse_track_seconds("three").is_err());
    }

    #[test]
    fn emptied_playlist_silences_device() {
        let mut session = session(1.0);
        session.on_tracks_changed(tracks(1));
        pump(&mut session);
        assert!(session.device().is_playing());

        session.on_tracks_changed(tracks(0));
        session.device_mut().tick(0.5);
        assert!(!session.device().is_playing());
        assert!(session.device_mut().drain().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn preview_cycles_through_playlist() {
        let mut session = session(1.0);
        let mut changes = Vec::new();

        run_preview(
            &mut session,
            tracks(3),
            PreviewOptions {
                total: Duration::from_secs(3),
                tick: Duration::from_millis(500),
            },
            |event| {
                if let SessionEvent::TrackChanged { index, .. } = event {
                    changes.push(*index);
                }
            },
        )
        .await;

        assert_eq!(changes, [0, 1, 2, 0]);
    }
}
