use std::sync::Arc;
use tokio::sync::RwLock;

use crate::cache::token::CachedToken;
use crate::helpers::time::now_ms;

/// Single-slot bearer token cache.
///
/// Cloning shares the slot. The lock is only held to read or replace the
/// token, never while a new one is being fetched.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    inner: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get token if it exists and is not expired
    pub async fn get(&self) -> Option<CachedToken> {
        self.inner
            .read()
            .await
            .as_ref()
            .filter(|token| token.is_valid_at(now_ms()))
            .cloned()
    }

    /// Raw slot content, expired or not
    pub async fn peek(&self) -> Option<CachedToken> {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, token: CachedToken) {
        *self.inner.write().await = Some(token);
    }

    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }
}
