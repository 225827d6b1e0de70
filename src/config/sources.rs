use serde::Deserialize;
use crate::config::settings::SettingsConfig;
use crate::utils::constants::{
    DEFAULT_API_PREFIX, DEFAULT_ASSET_SEGMENT, DEFAULT_HOME_PAGE_KEY, DEFAULT_MEDIA_TYPE,
    DEFAULT_REFERENCE_PREFIX,
};


/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    pub content: ContentConfig,
}

/// ================================
/// Content sources
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Where page content comes from.
    #[serde(rename = "source")]
    pub source_type: SourceTypes,
    /// Required when `source` is `cms`.
    pub cms: Option<CmsConfig>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceTypes {
    Static,
    Cms,
}

/// Headless CMS connection details
#[derive(Debug, Deserialize, Clone)]
pub struct CmsConfig {
    /// Base url of the CMS, e.g. `https://cms.example.com`
    pub api_url: String,
    /// Empty values count as absent; checked on first token request.
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Defaults to `{api_url}/globalassets`
    pub asset_base_url: Option<String>,
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,
    #[serde(default = "default_media_type")]
    pub media_type: String,
    #[serde(default = "default_home_page_key")]
    pub home_page_key: String,
    pub safety_margin_seconds: Option<u64>,
    pub request_timeout_ms: Option<u64>,
}

impl CmsConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client_id: None,
            client_secret: None,
            api_prefix: default_api_prefix(),
            asset_base_url: None,
            reference_prefix: default_reference_prefix(),
            media_type: default_media_type(),
            home_page_key: default_home_page_key(),
            safety_margin_seconds: None,
            request_timeout_ms: None,
        }
    }

    pub fn with_credentials(mut self, client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Absolute url for an api path such as `/oauth/token`.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}{}", self.api_url.trim_end_matches('/'), self.api_prefix, path)
    }

    pub fn asset_base_url(&self) -> String {
        match &self.asset_base_url {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
            _ => format!("{}/{}", self.api_url.trim_end_matches('/'), DEFAULT_ASSET_SEGMENT),
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref().filter(|v| !v.trim().is_empty())
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref().filter(|v| !v.trim().is_empty())
    }
}

fn default_api_prefix() -> String {
    DEFAULT_API_PREFIX.to_owned()
}

fn default_reference_prefix() -> String {
    DEFAULT_REFERENCE_PREFIX.to_owned()
}

fn default_media_type() -> String {
    DEFAULT_MEDIA_TYPE.to_owned()
}

fn default_home_page_key() -> String {
    DEFAULT_HOME_PAGE_KEY.to_owned()
}
