//! Keepsake Server Client
//!
//! HTTP client library for the Keepsake album backend.
//!
//! # Features
//!
//! - **Asset retrieval**: per-kind file lists for a client, as an
//!   [`AssetSource`](keepsake_core::AssetSource) for the gallery catalog
//! - **Authentication**: explicit [`AuthSession`] with persisted credentials
//!
//! # Example
//!
//! ```ignore
//! use keepsake_gallery::GalleryCatalog;
//! use keepsake_server_client::{AuthSession, FileCredentialStore, KeepsakeClient, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = AuthSession::init(FileCredentialStore::new("credentials.json"))?;
//!
//!     let mut config = ServerConfig::new("https://api.album.example.com");
//!     config.access_token = auth.bearer().map(str::to_string);
//!     let client = KeepsakeClient::new(config)?;
//!
//!     let mut catalog = GalleryCatalog::new();
//!     let report = catalog.load(&client, "c-42".into()).await?;
//!     println!("{} photos", catalog.photos().len());
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod types;

// Re-export main types
pub use auth::{AuthSession, CredentialStore, Credentials, FileCredentialStore, MemoryCredentialStore};
pub use client::KeepsakeClient;
pub use error::{Result, ServerClientError};
pub use types::{ServerAsset, ServerConfig, WireId, DEFAULT_TIMEOUT};
