//! Main Keepsake backend client.

use crate::error::{Result, ServerClientError};
use crate::types::{ServerAsset, ServerConfig};
use async_trait::async_trait;
use keepsake_core::{Asset, AssetKind, AssetSource, ClientId, RetrievalError};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

/// Client for the album backend.
///
/// Implements [`AssetSource`] so the gallery catalog can load a client's
/// collections through it. A bearer token is attached when one is set;
/// public albums load without one.
///
/// # Example
///
/// ```ignore
/// use keepsake_core::{AssetKind, AssetSource, ClientId};
/// use keepsake_server_client::{KeepsakeClient, ServerConfig};
///
/// let client = KeepsakeClient::new(ServerConfig::new("https://api.album.example.com"))?;
/// let photos = client
///     .fetch_assets(&ClientId::new("c-42"), AssetKind::Photo)
///     .await?;
/// println!("{} photos", photos.len());
/// ```
#[derive(Clone)]
pub struct KeepsakeClient {
    http: Client,
    config: Arc<RwLock<ServerConfig>>,
}

impl KeepsakeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        // Validate URL
        if config.url.trim().is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim().trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&url).map_err(|e| ServerClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(std::time::Duration::from_secs(10)))
            .user_agent(format!("Keepsake/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        let normalized_config = ServerConfig { url, ..config };

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
        })
    }

    /// Get the server URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client has an access token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    /// Set the bearer token (e.g., after [`AuthSession::login`](crate::AuthSession::login)).
    pub async fn set_token(&self, access_token: Option<String>) {
        let mut config = self.config.write().await;
        config.access_token = access_token;
    }

    /// List one kind of asset for a client.
    ///
    /// `GET {base}/clients/{client_id}/files?type={kind}`. Every returned
    /// asset is stamped with `kind`; order is preserved.
    pub async fn list_files(&self, client_id: &ClientId, kind: AssetKind) -> Result<Vec<Asset>> {
        let config = self.config.read().await;
        let url = files_url(&config.url, client_id)?;
        let token = config.access_token.clone();
        drop(config);

        debug!(url = %url, kind = %kind, "Fetching asset list");

        let mut request = self.http.get(url).query(&[("type", kind.as_str())]);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ServerClientError::ServerUnreachable(e.to_string())
            } else {
                ServerClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let records: Vec<ServerAsset> = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse asset list: {}", e))
            })?;

            let assets: Vec<Asset> = records.into_iter().map(|r| r.into_asset(kind)).collect();
            info!(
                client_id = %client_id,
                kind = %kind,
                count = assets.len(),
                "Fetched asset list"
            );
            Ok(assets)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(
                client_id = %client_id,
                kind = %kind,
                status = %status,
                "Asset list request failed"
            );
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

/// `{base}/clients/{client_id}/files`, with the id as one encoded segment
fn files_url(base: &str, client_id: &ClientId) -> Result<Url> {
    let id = client_id.as_str();
    if matches!(id, "" | "." | "..") {
        return Err(ServerClientError::InvalidClientId(id.to_string()));
    }

    let mut url = Url::parse(base).map_err(|e| ServerClientError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ServerClientError::InvalidUrl(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .extend(["clients", id, "files"]);
    Ok(url)
}

#[async_trait]
impl AssetSource for KeepsakeClient {
    async fn fetch_assets(
        &self,
        client_id: &ClientId,
        kind: AssetKind,
    ) -> std::result::Result<Vec<Asset>, RetrievalError> {
        self.list_files(client_id, kind).await.map_err(Into::into)
    }
}
