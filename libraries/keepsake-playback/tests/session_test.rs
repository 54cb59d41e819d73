//! End-to-end playback session scenarios against a fake device

mod common;

use common::{playlist, session, Command, FakeDevice};
use keepsake_playback::{
    DeviceEvent, DeviceEventKind, PlaybackError, PlaybackSession, SessionConfig, SessionEvent,
    SessionState, StartOutcome,
};

fn binding_of(session: &PlaybackSession<FakeDevice>) -> keepsake_playback::TrackBinding {
    session.binding().cloned().expect("track loaded")
}

#[test]
fn full_listening_flow() {
    let mut session = session();
    let ticket = session
        .on_tracks_changed(playlist(&["intro", "vows", "dance"]))
        .expect("autoplay requests a start");
    assert_eq!(session.on_start_result(ticket, Ok(())), StartOutcome::Started);

    let binding = binding_of(&session);
    session.handle_device_event(DeviceEvent::new(&binding, DeviceEventKind::DurationChange(200.0)));
    session.handle_device_event(DeviceEvent::new(&binding, DeviceEventKind::TimeUpdate(199.0)));
    assert_eq!(session.progress().remaining, "0:01");

    // Track finishes, playlist advances and starts the next one
    let next = session
        .handle_device_event(DeviceEvent::new(&binding, DeviceEventKind::Ended))
        .expect("advance requests a start");
    assert_eq!(session.cursor(), Some(1));
    assert_eq!(session.position(), 0.0);
    assert_eq!(session.duration(), 0.0);
    assert_eq!(session.state(), SessionState::Ready);

    session.on_start_result(next, Ok(()));
    assert!(session.is_playing());
    assert_eq!(
        session.current_track().map(|t| t.name.as_str()),
        Some("Song vows")
    );
}

#[test]
fn stale_start_does_not_affect_newer_selection() {
    let mut session = session();
    session.on_tracks_changed(playlist(&["a", "b", "c"]));

    let first = session.select_track(0).unwrap().unwrap();
    let second = session.select_track(1).unwrap().unwrap();

    // Track 0's start completes late, after the user moved on
    assert_eq!(session.on_start_result(first, Ok(())), StartOutcome::Stale);
    assert_eq!(session.cursor(), Some(1));
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.current_track().unwrap().id.as_str(), "b");

    // A late rejection for track 0 is equally ignored
    assert_eq!(
        session.on_start_result(first, Err("aborted".into())),
        StartOutcome::Stale
    );
    assert!(session.last_error().is_none());

    assert_eq!(session.on_start_result(second, Ok(())), StartOutcome::Started);
    assert!(session.is_playing());
}

#[test]
fn reports_from_replaced_track_are_dropped() {
    let mut session = session();
    session.on_tracks_changed(playlist(&["a", "b"]));
    let old = binding_of(&session);

    session.next();
    let commands = session.device().commands.len();

    session.handle_device_event(DeviceEvent::new(&old, DeviceEventKind::TimeUpdate(77.0)));
    session.handle_device_event(DeviceEvent::new(&old, DeviceEventKind::DurationChange(300.0)));
    assert!(session
        .handle_device_event(DeviceEvent::new(&old, DeviceEventKind::Ended))
        .is_none());

    assert_eq!(session.cursor(), Some(1));
    assert_eq!(session.position(), 0.0);
    assert_eq!(session.duration(), 0.0);
    assert_eq!(session.device().commands.len(), commands);
}

#[test]
fn rejected_autoplay_waits_for_explicit_play() {
    let mut session = session();
    let ticket = session.on_tracks_changed(playlist(&["a"])).unwrap();
    session.drain_events();

    let outcome = session.on_start_result(ticket, Err("NotAllowedError".into()));
    assert!(matches!(
        outcome,
        StartOutcome::Rejected(PlaybackError::PlaybackStartRejected(_))
    ));
    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.drain_events().contains(&SessionEvent::StartRejected {
        reason: "NotAllowedError".into()
    }));

    let retry = session.play().expect("play issues a new request");
    assert_ne!(retry, ticket);
    session.on_start_result(retry, Ok(()));
    assert!(session.is_playing());
}

#[test]
fn replacing_playlist_resets_cursor_and_rebinds() {
    let mut session = session();
    session.on_tracks_changed(playlist(&["a", "b", "c"]));
    session.select_track(2).unwrap();

    session.on_tracks_changed(playlist(&["x", "y"]));
    assert_eq!(session.cursor(), Some(0));
    assert_eq!(
        session.device().commands.iter().rev().find_map(|c| match c {
            Command::Bind(_, locator) => Some(locator.as_str()),
            _ => None,
        }),
        Some("https://media.example/x.mp3")
    );
}

#[test]
fn emptied_playlist_stops_everything() {
    let mut session = session();
    let ticket = session.on_tracks_changed(playlist(&["a"])).unwrap();
    session.on_start_result(ticket, Ok(()));

    session.on_tracks_changed(playlist(&[]));
    assert_eq!(session.state(), SessionState::Empty);
    assert!(session.current_track().is_none());
    assert!(session.device().active.is_none());
    assert_eq!(session.seek(10.0), Err(PlaybackError::NoTrackLoaded));
    assert!(session.play().is_none());
}

#[test]
fn seek_and_mute_round_trip_through_device() {
    let mut session = session();
    session.on_tracks_changed(playlist(&["a"]));
    let binding = binding_of(&session);
    session.handle_device_event(DeviceEvent::new(&binding, DeviceEventKind::DurationChange(60.0)));

    assert_eq!(session.seek(45.0), Ok(45.0));
    assert_eq!(session.seek(90.0), Ok(60.0));
    assert!(session.toggle_mute());

    let tail: Vec<_> = session.device().commands.iter().rev().take(3).cloned().collect();
    assert_eq!(
        tail,
        vec![Command::Mute(true), Command::Seek(60.0), Command::Seek(45.0)]
    );
}

#[test]
fn autoplay_disabled_keeps_device_quiet() {
    let mut session = PlaybackSession::new(
        FakeDevice::default(),
        SessionConfig {
            autoplay: false,
            ..SessionConfig::default()
        },
    );
    assert!(session.on_tracks_changed(playlist(&["a", "b"])).is_none());
    assert!(session.next().is_none());
    assert!(session.device().last_ticket().is_none());
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn infinite_seek_is_rejected_while_duration_unknown() {
    let mut session = session();
    session.on_tracks_changed(playlist(&["a"]));
    let commands = session.device().commands.len();

    assert_eq!(
        session.seek(f64::INFINITY),
        Err(PlaybackError::InvalidSeekPosition(f64::INFINITY))
    );
    assert_eq!(session.position(), 0.0);
    assert_eq!(session.device().commands.len(), commands);
}

#[test]
fn unknown_duration_renders_placeholder() {
    let mut session = session();
    session.on_tracks_changed(playlist(&["live"]));
    let binding = binding_of(&session);
    session.handle_device_event(DeviceEvent::new(
        &binding,
        DeviceEventKind::DurationChange(f64::INFINITY),
    ));
    session.handle_device_event(DeviceEvent::new(&binding, DeviceEventKind::TimeUpdate(30.0)));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.progress.elapsed, "0:30");
    assert_eq!(snapshot.progress.remaining, "0:00");
    // Unknown duration: no clamp
    assert_eq!(session.seek(4000.0), Ok(4000.0));
}
