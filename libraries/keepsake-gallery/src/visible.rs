//! Derived gallery view

use keepsake_core::Asset;
use std::slice;

/// Filtered, searched view over the visual collections
///
/// Lazy: nothing is matched until iterated. Restartable: the iterator is
/// `Clone`, and [`GalleryCatalog::visible_items`] can be called again.
/// Yields assets in collection order (photos before videos for `All`).
///
/// [`GalleryCatalog::visible_items`]: crate::GalleryCatalog::visible_items
#[derive(Debug, Clone)]
pub struct VisibleItems<'a> {
    first: slice::Iter<'a, Asset>,
    second: slice::Iter<'a, Asset>,
    needle: Option<String>,
}

impl<'a> VisibleItems<'a> {
    pub(crate) fn new(first: &'a [Asset], second: &'a [Asset], search: &str) -> Self {
        let needle = search.trim();
        Self {
            first: first.iter(),
            second: second.iter(),
            needle: (!needle.is_empty()).then(|| needle.to_string()),
        }
    }
}

impl<'a> Iterator for VisibleItems<'a> {
    type Item = &'a Asset;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_deref();
        self.first
            .by_ref()
            .chain(self.second.by_ref())
            .find(|asset| needle.map_or(true, |needle| asset.name_matches(needle)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.first.len() + self.second.len();
        if self.needle.is_none() {
            (upper, Some(upper))
        } else {
            (0, Some(upper))
        }
    }
}
