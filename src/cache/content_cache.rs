use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::observability::metrics::get_metrics;

/// In-memory key -> value cache without expiry.
///
/// Entries are served until `clear` is called; upstream changes are not
/// picked up before that. Concurrent misses on the same key may both fetch,
/// the last `set` wins.
#[derive(Debug, Clone)]
pub struct ContentCache<V> {
    name: &'static str,
    inner: Arc<RwLock<HashMap<String, V>>>,
}

impl<V: Clone> ContentCache<V> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        let value = self.inner.read().await.get(key).cloned();
        let metrics = get_metrics().await;
        match value {
            Some(_) => {
                debug!("{} cache hit '{}'", self.name, key);
                metrics.cache_hits.with_label_values(&[self.name]).inc();
            }
            None => {
                debug!("{} cache miss '{}'", self.name, key);
                metrics.cache_misses.with_label_values(&[self.name]).inc();
            }
        }
        value
    }

    pub async fn set(&self, key: &str, value: V) {
        let mut map = self.inner.write().await;
        map.insert(key.to_owned(), value);
        get_metrics()
            .await
            .cached_entries
            .with_label_values(&[self.name])
            .set(map.len() as i64);
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
        get_metrics()
            .await
            .cached_entries
            .with_label_values(&[self.name])
            .set(0);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
