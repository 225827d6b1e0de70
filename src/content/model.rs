//! Page content records handed to the rendering layer.
//!
//! Field names follow the CMS payloads (camelCase on the wire).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavigationItem>>,
}

impl NavigationItem {
    pub fn new(title: &str, url: &str) -> Self {
        Self { title: title.to_owned(), url: url.to_owned(), children: None }
    }

    pub fn with_children(mut self, children: Vec<NavigationItem>) -> Self {
        self.children = Some(children);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaButton {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderContent {
    pub logo: Image,
    pub navigation: Vec<NavigationItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_button: Option<CtaButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub sections: Vec<FooterSection>,
    pub copyright: String,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub cta_button: CtaButton,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedDestinations {
    pub title: String,
    pub destinations: Vec<Destination>,
}

/// Fully assembled page. Image fields hold final urls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub metadata: PageMetadata,
    pub header: HeaderContent,
    pub hero: HeroContent,
    pub featured_destinations: FeaturedDestinations,
    pub footer: FooterContent,
}

impl PageContent {
    /// Every image url of the page, header logo first.
    pub fn image_urls(&self) -> Vec<&str> {
        let mut urls = vec![self.header.logo.src.as_str(), self.hero.background_image.as_str()];
        urls.extend(
            self.featured_destinations
                .destinations
                .iter()
                .map(|d| d.image.as_str()),
        );
        urls
    }
}

/// Header and footer shown when page content could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackContent {
    pub header: HeaderContent,
    pub footer: FooterContent,
}
