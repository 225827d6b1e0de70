//! Shared constants and invariants

pub const DEFAULT_SAFETY_MARGIN_SECS: u64 = 60;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

// CMS defaults
pub const DEFAULT_API_PREFIX: &str = "/_cms/preview2";
pub const DEFAULT_REFERENCE_PREFIX: &str = "cms://content/";
pub const DEFAULT_ASSET_SEGMENT: &str = "globalassets";
pub const DEFAULT_MEDIA_TYPE: &str = "application/vnd.optimizely.cms.v1.includeSchema+json";
pub const DEFAULT_HOME_PAGE_KEY: &str = "532d21f496944221b01cf9dbcff4f35c";
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
pub const PUBLISHED_STATUS: &str = "published";

// Page ids
pub const PAGE_HOME: &str = "home";

// Cache labels
pub const CACHE_NODES: &str = "nodes";
pub const CACHE_PAGES: &str = "pages";
