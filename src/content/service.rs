use tracing::{error, info};

use crate::cache::content_cache::ContentCache;
use crate::cms::client::CmsClient;
use crate::config::sources::{ContentConfig, SourceTypes};
use crate::content::home;
use crate::content::model::{FallbackContent, PageContent};
use crate::error::{CmsError, ContentError};
use crate::helpers::time::get_instant;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::{CACHE_PAGES, PAGE_HOME};

/// Where pages are assembled from.
#[derive(Debug, Clone)]
pub enum ContentSource {
    Static,
    Cms(CmsClient),
}

impl ContentSource {
    pub async fn home_content(&self) -> Result<PageContent, CmsError> {
        match self {
            ContentSource::Static => Ok(home::home_content()),
            ContentSource::Cms(cms) => cms.get_home_content().await,
        }
    }

    pub async fn clear_cache(&self) {
        if let ContentSource::Cms(cms) = self {
            cms.clear_cache().await;
        }
    }
}

/// Page id -> assembled page, in front of a content source.
#[derive(Debug, Clone)]
pub struct ContentService {
    source: ContentSource,
    pages: ContentCache<PageContent>,
}

impl ContentService {
    pub fn new(source: ContentSource) -> Self {
        Self {
            source,
            pages: ContentCache::new(CACHE_PAGES),
        }
    }

    pub fn from_config(cfg: &ContentConfig) -> Result<Self, CmsError> {
        let source = match (cfg.source_type, &cfg.cms) {
            (SourceTypes::Cms, Some(cms)) => ContentSource::Cms(CmsClient::new(cms.clone())?),
            (SourceTypes::Cms, None) => return Err(CmsError::MissingSection("content.cms")),
            (SourceTypes::Static, _) => ContentSource::Static,
        };
        info!("content source: {:?}", cfg.source_type);
        Ok(Self::new(source))
    }

    /// Cached page, or a freshly assembled one. Failures are not cached.
    pub async fn get_page_content(&self, page_id: &str) -> Result<PageContent, ContentError> {
        if let Some(page) = self.pages.get(page_id).await {
            return Ok(page);
        }

        let metrics = get_metrics().await;
        let start = get_instant();
        let result = match page_id {
            PAGE_HOME => self.source.home_content().await,
            _ => {
                metrics.page_requests.with_label_values(&["other", "unknown"]).inc();
                return Err(ContentError::UnknownPage(page_id.to_owned()));
            }
        };
        metrics
            .page_assembly_duration
            .with_label_values(&[page_id])
            .observe(start.elapsed().as_secs_f64());

        match result {
            Ok(page) => {
                metrics.page_requests.with_label_values(&[page_id, "ok"]).inc();
                self.pages.set(page_id, page.clone()).await;
                Ok(page)
            }
            Err(source) => {
                error!("error fetching content for page {}: {}", page_id, source);
                metrics.page_requests.with_label_values(&[page_id, "error"]).inc();
                Err(ContentError::Fetch { page_id: page_id.to_owned(), source })
            }
        }
    }

    pub async fn get_home_content(&self) -> Result<PageContent, ContentError> {
        self.get_page_content(PAGE_HOME).await
    }

    /// Header and footer for the failure view.
    pub fn fallback_content(&self) -> FallbackContent {
        home::fallback_content()
    }

    /// Drop cached pages, resolved nodes and the access token.
    pub async fn clear_cache(&self) {
        info!("clearing content caches");
        self.pages.clear().await;
        self.source.clear_cache().await;
    }
}
