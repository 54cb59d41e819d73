//! Shared helpers for playback integration tests

#![allow(dead_code)]

use keepsake_core::{Asset, AssetKind};
use keepsake_playback::{PlaybackDevice, PlaybackSession, StartTicket, TrackBinding};
use std::sync::Arc;

/// Command seen by [`FakeDevice`]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Bind(u64, String),
    Release(u64),
    Play(StartTicket),
    Pause,
    Seek(f64),
    Mute(bool),
}

/// Device that records commands and tracks the active binding
#[derive(Debug, Default)]
pub struct FakeDevice {
    pub commands: Vec<Command>,
    pub active: Option<u64>,
}

impl FakeDevice {
    pub fn last_ticket(&self) -> Option<StartTicket> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::Play(t) => Some(*t),
            _ => None,
        })
    }
}

impl PlaybackDevice for FakeDevice {
    fn bind(&mut self, binding: &TrackBinding, locator: &str) {
        assert!(self.active.is_none(), "bind without release");
        self.active = Some(binding.id());
        self.commands
            .push(Command::Bind(binding.id(), locator.to_string()));
    }

    fn release(&mut self, binding: &TrackBinding) {
        assert_eq!(self.active, Some(binding.id()), "released foreign binding");
        self.active = None;
        self.commands.push(Command::Release(binding.id()));
    }

    fn play(&mut self, ticket: StartTicket) {
        self.commands.push(Command::Play(ticket));
    }

    fn pause(&mut self) {
        self.commands.push(Command::Pause);
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.commands.push(Command::Seek(seconds));
    }

    fn set_muted(&mut self, muted: bool) {
        self.commands.push(Command::Mute(muted));
    }
}

pub fn audio(id: &str) -> Asset {
    Asset::new(
        id,
        AssetKind::Audio,
        format!("Song {id}"),
        format!("https://media.example/{id}.mp3"),
    )
}

pub fn playlist(ids: &[&str]) -> Arc<[Asset]> {
    ids.iter().map(|id| audio(id)).collect()
}

pub fn session() -> PlaybackSession<FakeDevice> {
    PlaybackSession::default()
}
