//! Concurrent per-kind retrieval

use crate::types::{FetchedSnapshot, LoadTicket};
use keepsake_core::{AssetKind, AssetSource};
use tracing::debug;

/// Fetch the three asset collections for `ticket`'s client.
///
/// The three retrievals run concurrently and may finish in any order; each
/// result is kept independently so one failure does not discard the others.
/// Does not touch the catalog, so a newer load may be issued while this one
/// is still in flight.
pub async fn fetch_snapshot<S>(source: &S, ticket: &LoadTicket) -> FetchedSnapshot
where
    S: AssetSource + ?Sized,
{
    let client_id = ticket.client_id();
    debug!(client_id = %client_id, generation = ticket.generation(), "Fetching assets");

    let (photos, videos, audio) = tokio::join!(
        source.fetch_assets(client_id, AssetKind::Photo),
        source.fetch_assets(client_id, AssetKind::Video),
        source.fetch_assets(client_id, AssetKind::Audio),
    );

    FetchedSnapshot {
        photos,
        videos,
        audio,
    }
}
