//! Keepsake - Gallery Catalog
//!
//! Holds one client's assets split by kind and derives the gallery view.
//!
//! This crate provides:
//! - Three ordered collections (photo, video, audio) per client
//! - Type filtering (`all`, `photo`, `video`) for the visual gallery
//! - Case-insensitive name search preserving server order
//! - Staleness-tagged loads: results for a client that is no longer
//!   current are discarded
//!
//! Audio is kept apart from the gallery filter; the playback session reads
//! it through [`GalleryCatalog::audio_tracks`].
//!
//! # Example
//!
//! ```rust
//! use keepsake_core::{Asset, AssetKind, ClientId};
//! use keepsake_gallery::{FetchedSnapshot, FilterKind, GalleryCatalog};
//!
//! let mut catalog = GalleryCatalog::new();
//! let ticket = catalog.on_client_changed(ClientId::new("client-1"));
//!
//! let snapshot = FetchedSnapshot {
//!     photos: Ok(vec![
//!         Asset::new("1", AssetKind::Photo, "Beach Day", "https://cdn/1.jpg"),
//!         Asset::new("2", AssetKind::Photo, "Mountain", "https://cdn/2.jpg"),
//!     ]),
//!     videos: Ok(vec![]),
//!     audio: Ok(vec![]),
//! };
//! catalog.complete_load(&ticket, snapshot).unwrap();
//!
//! catalog.set_filter_kind(FilterKind::Photo);
//! catalog.set_search_term("beach");
//! let names: Vec<_> = catalog.visible_items().map(|a| a.name.as_str()).collect();
//! assert_eq!(names, ["Beach Day"]);
//! ```

mod catalog;
mod error;
mod fetch;
pub mod types;
mod visible;

// Public exports
pub use catalog::GalleryCatalog;
pub use error::{GalleryError, Result};
pub use fetch::fetch_snapshot;
pub use types::{FetchedSnapshot, FilterKind, LoadReport, LoadTicket};
pub use visible::VisibleItems;
