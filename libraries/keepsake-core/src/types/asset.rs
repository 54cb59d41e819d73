//! Uploaded media assets

use super::ids::AssetId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media kind of an asset
///
/// Fixed at upload time; decides which collection the asset lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Still image
    Photo,
    /// Video clip
    Video,
    /// Audio track (played through the playlist)
    Audio,
}

impl AssetKind {
    /// Every kind, in the order the backend is queried
    pub const ALL: [AssetKind; 3] = [AssetKind::Photo, AssetKind::Video, AssetKind::Audio];

    /// Wire name used in `?type=` queries
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Photo => "photo",
            AssetKind::Video => "video",
            AssetKind::Audio => "audio",
        }
    }

    /// Whether assets of this kind appear in the photo/video gallery
    pub fn is_visual(&self) -> bool {
        matches!(self, AssetKind::Photo | AssetKind::Video)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown asset kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown asset kind: {0}")]
pub struct ParseAssetKindError(pub String);

impl FromStr for AssetKind {
    type Err = ParseAssetKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "photo" => Ok(AssetKind::Photo),
            "video" => Ok(AssetKind::Video),
            "audio" => Ok(AssetKind::Audio),
            other => Err(ParseAssetKindError(other.to_string())),
        }
    }
}

/// One uploaded media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique asset identifier
    pub id: AssetId,

    /// Media kind (immutable)
    pub kind: AssetKind,

    /// Display name, also used for search
    pub name: String,

    /// URI of the binary content
    pub locator: String,
}

impl Asset {
    /// Create a new asset
    pub fn new(
        id: impl Into<String>,
        kind: AssetKind,
        name: impl Into<String>,
        locator: impl Into<String>,
    ) -> Self {
        Self {
            id: AssetId::new(id),
            kind,
            name: name.into(),
            locator: locator.into(),
        }
    }

    /// Case-insensitive substring match of `term` against the name.
    ///
    /// Surrounding whitespace in `term` is ignored and a blank term matches
    /// every asset.
    pub fn name_matches(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty() || self.name.to_lowercase().contains(&term.to_lowercase())
    }
}
