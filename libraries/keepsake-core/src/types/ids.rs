/// ID types for Keepsake entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client identifier
///
/// Clients are addressed by the UUID embedded in their public album link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Create a new client ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Asset identifier
///
/// Opaque and stable for the lifetime of the upload. The backend may hand
/// out numeric ids; they are kept in their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Create a new asset ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_from_str_and_display_agree() {
        let id = ClientId::from("6f1c2a9e");
        assert_eq!(id.to_string(), "6f1c2a9e");
        assert_eq!(id, ClientId::new("6f1c2a9e"));
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&ClientId::new("c-1")).unwrap();
        assert_eq!(json, "\"c-1\"");
    }
}
