//! Property-based tests for the gallery view
//!
//! The visible view must be exactly the order-preserving subsequence of the
//! filtered collections whose names contain the search term.

use keepsake_core::{Asset, AssetKind, ClientId};
use keepsake_gallery::{FetchedSnapshot, FilterKind, GalleryCatalog};
use proptest::prelude::*;

// ===== Helpers =====

fn arbitrary_assets(kind: AssetKind) -> impl Strategy<Value = Vec<Asset>> {
    prop::collection::vec("[A-Za-z ]{0,12}", 0..20).prop_map(move |names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Asset::new(format!("{kind}-{i}"), kind, name, "https://cdn/x"))
            .collect()
    })
}

fn arbitrary_filter() -> impl Strategy<Value = FilterKind> {
    prop_oneof![
        Just(FilterKind::All),
        Just(FilterKind::Photo),
        Just(FilterKind::Video),
    ]
}

fn catalog_with(photos: Vec<Asset>, videos: Vec<Asset>) -> GalleryCatalog {
    let mut catalog = GalleryCatalog::new();
    let ticket = catalog.on_client_changed(ClientId::new("prop"));
    catalog
        .complete_load(
            &ticket,
            FetchedSnapshot {
                photos: Ok(photos),
                videos: Ok(videos),
                audio: Ok(Vec::new()),
            },
        )
        .unwrap();
    catalog
}

// ===== Property Tests =====

proptest! {
    /// Property: the view equals a stable filter over photos ++ videos
    #[test]
    fn view_is_ordered_filtered_subsequence(
        photos in arbitrary_assets(AssetKind::Photo),
        videos in arbitrary_assets(AssetKind::Video),
        filter in arbitrary_filter(),
        term in "[A-Za-z ]{0,3}",
    ) {
        let mut catalog = catalog_with(photos.clone(), videos.clone());
        catalog.set_filter_kind(filter);
        catalog.set_search_term(term.clone());

        let expected: Vec<&Asset> = photos
            .iter()
            .chain(videos.iter())
            .filter(|a| filter.includes(a.kind))
            .filter(|a| {
                let term = term.trim().to_lowercase();
                term.is_empty() || a.name.to_lowercase().contains(&term)
            })
            .collect();
        let actual: Vec<&Asset> = catalog.visible_items().collect();

        prop_assert_eq!(actual, expected);
    }

    /// Property: iterating twice yields the same sequence
    #[test]
    fn view_is_restartable(
        photos in arbitrary_assets(AssetKind::Photo),
        term in "[a-z]{0,2}",
    ) {
        let mut catalog = catalog_with(photos, Vec::new());
        catalog.set_search_term(term);

        let first: Vec<_> = catalog.visible_items().map(|a| a.id.clone()).collect();
        let second: Vec<_> = catalog.visible_items().map(|a| a.id.clone()).collect();
        prop_assert_eq!(first, second);
    }

    /// Property: search never returns an asset whose name lacks the term
    #[test]
    fn view_items_all_match(
        photos in arbitrary_assets(AssetKind::Photo),
        videos in arbitrary_assets(AssetKind::Video),
        term in "[A-Za-z]{1,2}",
    ) {
        let mut catalog = catalog_with(photos, videos);
        catalog.set_search_term(term.clone());
        let needle = term.to_lowercase();

        for asset in catalog.visible_items() {
            prop_assert!(asset.name.to_lowercase().contains(&needle));
            prop_assert!(asset.kind.is_visual());
        }
    }
}
