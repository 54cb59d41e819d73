//! Core types for the gallery catalog

use crate::error::GalleryError;
use keepsake_core::{Asset, AssetKind, ClientId, RetrievalError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which visual kinds the gallery shows
///
/// Audio is never part of the gallery; it belongs to the playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Photos followed by videos
    #[default]
    All,

    /// Photos only
    Photo,

    /// Videos only
    Video,
}

impl FilterKind {
    /// Whether assets of `kind` pass this filter
    pub fn includes(&self, kind: AssetKind) -> bool {
        match self {
            FilterKind::All => kind.is_visual(),
            FilterKind::Photo => kind == AssetKind::Photo,
            FilterKind::Video => kind == AssetKind::Video,
        }
    }

    /// Wire/display name
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::All => "all",
            FilterKind::Photo => "photo",
            FilterKind::Video => "video",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterKind::All),
            "photo" => Ok(FilterKind::Photo),
            "video" => Ok(FilterKind::Video),
            other => Err(GalleryError::InvalidFilter(other.to_string())),
        }
    }
}

/// Tag identifying one load issued by [`GalleryCatalog::on_client_changed`]
///
/// Only the most recently issued ticket may complete; every earlier ticket
/// is stale.
///
/// [`GalleryCatalog::on_client_changed`]: crate::GalleryCatalog::on_client_changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub(crate) client_id: ClientId,
    pub(crate) generation: u64,
}

impl LoadTicket {
    /// Client this load was issued for
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Monotonic load counter
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Raw results of the three per-kind retrievals
#[derive(Debug, Clone)]
pub struct FetchedSnapshot {
    /// Photo retrieval result
    pub photos: Result<Vec<Asset>, RetrievalError>,

    /// Video retrieval result
    pub videos: Result<Vec<Asset>, RetrievalError>,

    /// Audio retrieval result
    pub audio: Result<Vec<Asset>, RetrievalError>,
}

/// Outcome of an applied load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// Client the snapshot belongs to
    pub client_id: ClientId,

    /// Number of photos now in the catalog
    pub photos: usize,

    /// Number of videos now in the catalog
    pub videos: usize,

    /// Number of audio tracks now in the catalog
    pub audio: usize,

    /// Kinds whose retrieval failed (their collections are now empty)
    pub failures: Vec<(AssetKind, RetrievalError)>,
}

impl LoadReport {
    /// Whether all three retrievals succeeded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether the retrieval for `kind` failed
    pub fn failed(&self, kind: AssetKind) -> bool {
        self.failures.iter().any(|(k, _)| *k == kind)
    }
}
