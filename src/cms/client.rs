use std::sync::Arc;
use std::time::Duration;

use http::header::CONTENT_TYPE;
use http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::content_cache::ContentCache;
use crate::cms::token_manager::TokenManager;
use crate::cms::types::CmsNode;
use crate::config::sources::CmsConfig;
use crate::error::CmsError;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::{CACHE_NODES, DEFAULT_HTTP_TIMEOUT_MS};

/// Retries granted after a 401, each with a freshly exchanged token.
const UNAUTHORIZED_RETRIES: u32 = 1;

/// Authenticated client for the CMS content api.
///
/// Cheap to clone: clones share the token and the resolved node cache.
#[derive(Debug, Clone)]
pub struct CmsClient {
    pub(crate) cfg: Arc<CmsConfig>,
    pub(crate) client: Client,
    pub(crate) tokens: TokenManager,
    pub(crate) nodes: ContentCache<CmsNode>,
}

impl CmsClient {
    pub fn new(cfg: CmsConfig) -> Result<Self, CmsError> {
        let timeout_ms = cfg.request_timeout_ms.unwrap_or(DEFAULT_HTTP_TIMEOUT_MS);
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self::with_client(cfg, client))
    }

    pub fn with_client(cfg: CmsConfig, client: Client) -> Self {
        let cfg = Arc::new(cfg);
        let tokens = TokenManager::new(cfg.clone(), client.clone());
        Self {
            cfg,
            client,
            tokens,
            nodes: ContentCache::new(CACHE_NODES),
        }
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    /// GET an api path with the current bearer token.
    ///
    /// A 401 invalidates the token and retries once; any other failure, or
    /// a second 401, is returned as `CmsError::Upstream`.
    pub async fn fetch_node<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, CmsError> {
        let url = self.cfg.endpoint_url(endpoint);
        let kind = endpoint_kind(endpoint);
        let metrics = get_metrics().await;
        let mut attempt = 0;

        loop {
            let token = self.tokens.get_access_token().await?;
            debug!("GET {} (attempt {})", endpoint, attempt + 1);
            let response = self
                .client
                .get(&url)
                .bearer_auth(&token)
                .header(CONTENT_TYPE, self.cfg.media_type.as_str())
                .send()
                .await?;

            let status = response.status();
            metrics.cms_requests.with_label_values(&[kind, status.as_str()]).inc();

            if status.is_success() {
                let body = response.bytes().await?;
                return Ok(serde_json::from_slice(&body)?);
            }

            if status == StatusCode::UNAUTHORIZED && attempt < UNAUTHORIZED_RETRIES {
                warn!("CMS rejected access token for {}, refreshing", endpoint);
                self.tokens.invalidate().await;
                attempt += 1;
                continue;
            }

            warn!("CMS api error {} for {}", status, endpoint);
            return Err(CmsError::Upstream { status, endpoint: endpoint.to_owned() });
        }
    }

    /// Drop resolved nodes and the access token.
    pub async fn clear_cache(&self) {
        self.nodes.clear().await;
        self.tokens.invalidate().await;
    }
}

fn endpoint_kind(endpoint: &str) -> &'static str {
    if endpoint.contains("/versions?") {
        "version_list"
    } else {
        "content"
    }
}
