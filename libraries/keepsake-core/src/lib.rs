//! Keepsake Core
//!
//! Shared domain types and traits for Keepsake client albums.
//!
//! An album belongs to a *client* (identified by a [`ClientId`]) and holds
//! uploaded [`Asset`]s of three kinds: photos, videos and audio tracks.
//! The gallery and playback crates build on these types; the server client
//! crate provides the HTTP implementation of [`AssetSource`].
//!
//! # Example
//!
//! ```rust
//! use keepsake_core::{Asset, AssetKind, ClientId};
//!
//! let client = ClientId::new("6f1c2a9e-0d7b-4a55-9b1e-3f1f1b0c2d11");
//! let photo = Asset::new("42", AssetKind::Photo, "Beach Day", "https://cdn.example.com/42.jpg");
//!
//! assert_eq!(photo.kind, AssetKind::Photo);
//! assert!(photo.name_matches("beach"));
//! assert_eq!(client.as_str().len(), 36);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod share;
pub mod traits;
pub mod types;

pub use error::RetrievalError;
pub use share::share_link;
pub use traits::AssetSource;
pub use types::{Asset, AssetId, AssetKind, ClientId};
