//! Wire records of the CMS REST api.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::model::{CtaButton, FooterContent, NavigationItem, PageMetadata};

/// `POST /oauth/token` request body
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

/// `POST /oauth/token` response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub expires_in: u64,
}

/// `GET /content/{key}/versions?statuses=published`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionList {
    #[serde(default)]
    pub items: Vec<VersionItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionItem {
    pub key: String,
    pub version: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// `GET /content/{key}/versions/{version}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsNode<T = Value> {
    pub key: String,
    #[serde(default)]
    pub content_type: Value,
    pub properties: T,
    #[serde(default)]
    pub route_segment: Option<String>,
}

impl CmsNode<Value> {
    /// Reinterpret untyped properties as `T`.
    pub fn into_typed<T: serde::de::DeserializeOwned>(self) -> Result<CmsNode<T>, serde_json::Error> {
        Ok(CmsNode {
            key: self.key,
            content_type: self.content_type,
            properties: serde_json::from_value(self.properties)?,
            route_segment: self.route_segment,
        })
    }
}

/// Home node properties: image fields are content references.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageCmsProperties {
    pub metadata: PageMetadata,
    pub header: CmsHeader,
    pub hero: CmsHero,
    pub featured_destinations: CmsFeaturedDestinations,
    pub footer: FooterContent,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsHeader {
    pub logo: String,
    #[serde(default)]
    pub logo_alt: Option<String>,
    #[serde(default)]
    pub navigation: Vec<NavigationItem>,
    #[serde(default)]
    pub cta_button: Option<CtaButton>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsHero {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub cta_button: CtaButton,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsFeaturedDestinations {
    pub title: String,
    #[serde(default)]
    pub destinations: Vec<CmsDestination>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsDestination {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
}
