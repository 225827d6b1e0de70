use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::cache::token::CachedToken;
use crate::cache::token_cache::TokenCache;
use crate::config::sources::CmsConfig;
use crate::error::CmsError;
use crate::helpers::time::{expiry_from_ttl_ms, get_token_safety_margin_seconds, now_ms};
use crate::observability::metrics::get_metrics;
use crate::utils::constants::GRANT_TYPE_CLIENT_CREDENTIALS;

use super::types::{TokenRequest, TokenResponse};

const TOKEN_PATH: &str = "/oauth/token";

/// OAuth2 client-credentials token source for the CMS.
///
/// Cloning shares the cached token.
#[derive(Debug, Clone)]
pub struct TokenManager {
    cfg: Arc<CmsConfig>,
    client: Client,
    cache: TokenCache,
}

impl TokenManager {
    pub fn new(cfg: Arc<CmsConfig>, client: Client) -> Self {
        Self { cfg, client, cache: TokenCache::new() }
    }

    pub fn safety_margin(&self) -> u64 {
        get_token_safety_margin_seconds(self.cfg.safety_margin_seconds)
    }

    /// Cached token while it is valid, a freshly exchanged one otherwise.
    pub async fn get_access_token(&self) -> Result<String, CmsError> {
        if let Some(token) = self.cache.get().await {
            return Ok(token.value);
        }

        let token = self.fetch_token().await?;
        let value = token.value.clone();
        self.cache.set(token).await;
        Ok(value)
    }

    /// Drop the cached token so the next call exchanges a new one.
    pub async fn invalidate(&self) {
        debug!("invalidating cached CMS access token");
        self.cache.invalidate().await;
    }

    /// Current slot content, expired or not.
    pub async fn cached_token(&self) -> Option<CachedToken> {
        self.cache.peek().await
    }

    async fn fetch_token(&self) -> Result<CachedToken, CmsError> {
        let client_id = self.cfg.client_id().ok_or(CmsError::Configuration("client_id"))?;
        let client_secret = self.cfg.client_secret().ok_or(CmsError::Configuration("client_secret"))?;
        let metrics = get_metrics().await;

        let body = TokenRequest {
            grant_type: GRANT_TYPE_CLIENT_CREDENTIALS,
            client_id,
            client_secret,
        };
        let url = self.cfg.endpoint_url(TOKEN_PATH);
        info!("requesting CMS access token");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .inspect_err(|_| metrics.token_refreshes.with_label_values(&["error"]).inc())?;

        let status = response.status();
        if !status.is_success() {
            warn!("CMS token request failed: {}", status);
            metrics.token_refreshes.with_label_values(&["rejected"]).inc();
            return Err(CmsError::Auth(status));
        }

        let token_response: TokenResponse = response.json().await?;
        let expires_at_ms = expiry_from_ttl_ms(now_ms(), token_response.expires_in, self.safety_margin());
        metrics.token_refreshes.with_label_values(&["ok"]).inc();
        debug!(
            "CMS access token received, type {:?}, expires_in {}s",
            token_response.token_type, token_response.expires_in
        );

        Ok(CachedToken::new(token_response.access_token, expires_at_ms))
    }
}
