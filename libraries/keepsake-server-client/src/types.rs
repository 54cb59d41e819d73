//! Types for Keepsake backend requests and responses.

use keepsake_core::{Asset, AssetKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for connecting to the album backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the backend (e.g., "https://api.album.example.com")
    pub url: String,
    /// Bearer token attached to requests (if logged in)
    pub access_token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ServerConfig {
    /// Create a new server config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a config carrying a bearer token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Self::new(url)
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// Asset Types
// =============================================================================

/// Asset id as the backend sends it: numeric or string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireId::Number(n) => write!(f, "{n}"),
            WireId::Text(s) => f.write_str(s),
        }
    }
}

/// An asset record as returned by `GET /clients/{id}/files`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerAsset {
    pub id: WireId,
    pub name: String,
    pub url: String,
    /// Server-side type tag; informational only
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ServerAsset {
    /// Convert into a domain asset of the requested kind.
    ///
    /// The kind comes from the request, not from the record.
    pub fn into_asset(self, kind: AssetKind) -> Asset {
        Asset::new(self.id.to_string(), kind, self.name, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_normalise() {
        let records: Vec<ServerAsset> = serde_json::from_str(
            r#"[
                {"id": 17, "name": "a.jpg", "url": "https://cdn/a.jpg"},
                {"id": "x9", "name": "b.jpg", "url": "https://cdn/b.jpg", "type": "photo"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records[0].id, WireId::Number(17));
        assert_eq!(records[0].id.to_string(), "17");
        assert_eq!(records[1].id.to_string(), "x9");
        assert_eq!(records[1].kind.as_deref(), Some("photo"));
    }

    #[test]
    fn requested_kind_wins_over_record_type() {
        let record = ServerAsset {
            id: WireId::Number(1),
            name: "clip".into(),
            url: "https://cdn/clip.mp4".into(),
            kind: Some("photo".into()),
        };
        let asset = record.into_asset(AssetKind::Video);
        assert_eq!(asset.kind, AssetKind::Video);
        assert_eq!(asset.locator, "https://cdn/clip.mp4");
        assert_eq!(asset.id.as_str(), "1");
    }

    #[test]
    fn config_builders() {
        let config = ServerConfig::with_token("https://api.example.com", "tok")
            .timeout(Duration::from_secs(5));
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(ServerConfig::new("x").timeout, DEFAULT_TIMEOUT);
    }
}
