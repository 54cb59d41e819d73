//! Domain types for Keepsake

mod asset;
mod ids;

pub use asset::{Asset, AssetKind, ParseAssetKindError};
pub use ids::{AssetId, ClientId};
