//! Gallery catalog - per-client asset snapshot

use crate::{
    error::{GalleryError, Result},
    fetch::fetch_snapshot,
    types::{FetchedSnapshot, FilterKind, LoadReport, LoadTicket},
    visible::VisibleItems,
};
use keepsake_core::{Asset, AssetKind, AssetSource, ClientId, RetrievalError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Per-client catalog of photo, video and audio assets
///
/// Collections are replaced wholesale when a load completes. A retrieval
/// that failed leaves its collection empty; the failure is reported in the
/// returned [`LoadReport`].
///
/// Collections are held as `Arc<[Asset]>` so consumers (the playback
/// session) can detect replacement by pointer identity.
#[derive(Debug)]
pub struct GalleryCatalog {
    client_id: Option<ClientId>,
    generation: u64,
    pending: Option<LoadTicket>,

    photos: Arc<[Asset]>,
    videos: Arc<[Asset]>,
    audio: Arc<[Asset]>,

    filter: FilterKind,
    search: String,

    // Bumped every time a snapshot is applied or invalidated
    revision: u64,
}

impl GalleryCatalog {
    /// Create an empty catalog with no client selected
    pub fn new() -> Self {
        Self {
            client_id: None,
            generation: 0,
            pending: None,
            photos: Arc::from(Vec::<Asset>::new()),
            videos: Arc::from(Vec::<Asset>::new()),
            audio: Arc::from(Vec::<Asset>::new()),
            filter: FilterKind::default(),
            search: String::new(),
            revision: 0,
        }
    }

    // ===== Loading =====

    /// Start loading assets for `client_id`.
    ///
    /// Any load still in flight becomes stale. Switching to a different
    /// client clears the current snapshot immediately so the previous
    /// client's assets are never shown under the new id; re-issuing the
    /// same id (a retry) keeps the snapshot until the new load lands.
    pub fn on_client_changed(&mut self, client_id: ClientId) -> LoadTicket {
        self.generation += 1;

        if self.client_id.as_ref() != Some(&client_id) {
            debug!(client_id = %client_id, "Client changed, invalidating snapshot");
            self.clear_collections();
            self.client_id = Some(client_id.clone());
        }

        if let Some(stale) = self.pending.take() {
            debug!(
                client_id = %stale.client_id,
                generation = stale.generation,
                "Superseding in-flight load"
            );
        }

        let ticket = LoadTicket {
            client_id,
            generation: self.generation,
        };
        self.pending = Some(ticket.clone());
        ticket
    }

    /// Apply fetched results for `ticket`.
    ///
    /// All three collections are swapped together. Kinds whose retrieval
    /// failed become empty.
    ///
    /// # Errors
    /// Returns [`GalleryError::StaleLoad`] (and changes nothing) if a newer
    /// load was issued after `ticket`.
    pub fn complete_load(
        &mut self,
        ticket: &LoadTicket,
        snapshot: FetchedSnapshot,
    ) -> Result<LoadReport> {
        if self.pending.as_ref() != Some(ticket) {
            debug!(
                client_id = %ticket.client_id,
                generation = ticket.generation,
                "Discarding stale load"
            );
            return Err(GalleryError::StaleLoad {
                client_id: ticket.client_id.clone(),
                generation: ticket.generation,
            });
        }
        self.pending = None;

        let mut failures = Vec::new();
        let FetchedSnapshot {
            photos,
            videos,
            audio,
        } = snapshot;

        let photos = collect_kind(AssetKind::Photo, photos, ticket, &mut failures);
        let videos = collect_kind(AssetKind::Video, videos, ticket, &mut failures);
        let audio = collect_kind(AssetKind::Audio, audio, ticket, &mut failures);

        self.photos = photos;
        self.videos = videos;
        self.audio = audio;
        self.revision += 1;

        let report = LoadReport {
            client_id: ticket.client_id.clone(),
            photos: self.photos.len(),
            videos: self.videos.len(),
            audio: self.audio.len(),
            failures,
        };

        info!(
            client_id = %report.client_id,
            photos = report.photos,
            videos = report.videos,
            audio = report.audio,
            failed = report.failures.len(),
            "Catalog loaded"
        );

        Ok(report)
    }

    /// Load `client_id`'s assets from `source` and apply them.
    ///
    /// Shorthand for [`on_client_changed`](Self::on_client_changed),
    /// [`fetch_snapshot`] and [`complete_load`](Self::complete_load).
    pub async fn load<S>(&mut self, source: &S, client_id: ClientId) -> Result<LoadReport>
    where
        S: AssetSource + ?Sized,
    {
        let ticket = self.on_client_changed(client_id);
        let snapshot = fetch_snapshot(source, &ticket).await;
        self.complete_load(&ticket, snapshot)
    }

    /// Whether a load has been issued and not yet completed
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Client whose assets this catalog represents
    pub fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Counter bumped whenever the collections are replaced
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ===== Filter & search =====

    /// Set the gallery type filter
    pub fn set_filter_kind(&mut self, filter: FilterKind) {
        self.filter = filter;
    }

    /// Current gallery type filter
    pub fn filter_kind(&self) -> FilterKind {
        self.filter
    }

    /// Set the free-text name search
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Current search text, as entered
    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// Gallery items passing the filter and search, in collection order
    pub fn visible_items(&self) -> VisibleItems<'_> {
        match self.filter {
            FilterKind::All => VisibleItems::new(&self.photos, &self.videos, &self.search),
            FilterKind::Photo => VisibleItems::new(&self.photos, &[], &self.search),
            FilterKind::Video => VisibleItems::new(&self.videos, &[], &self.search),
        }
    }

    // ===== Collections =====

    /// Photo collection in server order
    pub fn photos(&self) -> &[Asset] {
        &self.photos
    }

    /// Video collection in server order
    pub fn videos(&self) -> &[Asset] {
        &self.videos
    }

    /// Audio collection in server order
    pub fn audio(&self) -> &[Asset] {
        &self.audio
    }

    /// Shared handle to the audio collection, for the playback session
    pub fn audio_tracks(&self) -> Arc<[Asset]> {
        Arc::clone(&self.audio)
    }

    /// Collection for `kind`
    pub fn collection(&self, kind: AssetKind) -> &[Asset] {
        match kind {
            AssetKind::Photo => &self.photos,
            AssetKind::Video => &self.videos,
            AssetKind::Audio => &self.audio,
        }
    }

    /// Whether there is anything to show in the visual gallery
    pub fn has_media(&self) -> bool {
        !self.photos.is_empty() || !self.videos.is_empty()
    }

    fn clear_collections(&mut self) {
        self.photos = Arc::from(Vec::<Asset>::new());
        self.videos = Arc::from(Vec::<Asset>::new());
        self.audio = Arc::from(Vec::<Asset>::new());
        self.revision += 1;
    }
}

impl Default for GalleryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn one retrieval result into its collection, recording failures.
fn collect_kind(
    kind: AssetKind,
    result: std::result::Result<Vec<Asset>, RetrievalError>,
    ticket: &LoadTicket,
    failures: &mut Vec<(AssetKind, RetrievalError)>,
) -> Arc<[Asset]> {
    match result {
        Ok(assets) => {
            let total = assets.len();
            let kept: Vec<Asset> = assets.into_iter().filter(|a| a.kind == kind).collect();
            if kept.len() != total {
                warn!(
                    client_id = %ticket.client_id,
                    kind = %kind,
                    dropped = total - kept.len(),
                    "Dropping assets of a different kind"
                );
            }
            Arc::from(kept)
        }
        Err(e) => {
            warn!(client_id = %ticket.client_id, kind = %kind, error = %e, "Asset retrieval failed");
            failures.push((kind, e));
            Arc::from(Vec::<Asset>::new())
        }
    }
}
