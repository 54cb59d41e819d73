/// Core traits for Keepsake
use crate::error::RetrievalError;
use crate::types::{Asset, AssetKind, ClientId};
use async_trait::async_trait;
use std::sync::Arc;

/// Asset retrieval trait
///
/// Returns one client's assets of a single kind, in server order.
/// Implementations must stamp `kind` onto every returned asset.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch all assets of `kind` belonging to `client_id`
    ///
    /// # Errors
    /// Returns a [`RetrievalError`] on network or server failure
    async fn fetch_assets(
        &self,
        client_id: &ClientId,
        kind: AssetKind,
    ) -> Result<Vec<Asset>, RetrievalError>;
}

#[async_trait]
impl<T: AssetSource + ?Sized> AssetSource for Arc<T> {
    async fn fetch_assets(
        &self,
        client_id: &ClientId,
        kind: AssetKind,
    ) -> Result<Vec<Asset>, RetrievalError> {
        (**self).fetch_assets(client_id, kind).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnePerKind;

    #[async_trait]
    impl AssetSource for OnePerKind {
        async fn fetch_assets(
            &self,
            _client_id: &ClientId,
            kind: AssetKind,
        ) -> Result<Vec<Asset>, RetrievalError> {
            Ok(vec![Asset::new("1", kind, kind.as_str(), "https://x/1")])
        }
    }

    #[tokio::test]
    async fn arc_sources_delegate() {
        let source: Arc<dyn AssetSource> = Arc::new(OnePerKind);
        let assets = source
            .fetch_assets(&ClientId::new("c"), AssetKind::Video)
            .await
            .unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].kind, AssetKind::Video);
    }
}
