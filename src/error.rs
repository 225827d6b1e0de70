use http::StatusCode;
use thiserror::Error;

/// Failures of the CMS fetch layer.
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("CMS client credentials are not configured: missing {0}")]
    Configuration(&'static str),

    #[error("CMS content source selected but {0} is not configured")]
    MissingSection(&'static str),

    #[error("failed to get access token: {0}")]
    Auth(StatusCode),

    #[error("CMS API error: {status} for {endpoint}")]
    Upstream { status: StatusCode, endpoint: String },

    #[error("no published version found for content: {0}")]
    NotFound(String),

    #[error("content key {0:?} is not a single path segment")]
    InvalidKey(String),

    #[error("content {0} has no route segment to build an asset url from")]
    MissingRouteSegment(String),

    #[error("CMS request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected CMS payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CmsError {
    /// Upstream status, if the failure carried one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CmsError::Auth(status) => Some(*status),
            CmsError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failures surfaced to whoever renders a page.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content not found for page: {0}")]
    UnknownPage(String),

    #[error("failed to fetch content for page {page_id}: {source}")]
    Fetch {
        page_id: String,
        #[source]
        source: CmsError,
    },
}
