//! Built-in home page, served when the content source is `static`.

use crate::content::model::{
    CtaButton, Destination, FallbackContent, FeaturedDestinations, FooterContent, FooterSection,
    HeaderContent, HeroContent, Image, Link, NavigationItem, PageContent, PageMetadata, SocialLink,
};

const SITE_NAME: &str = "Days Out Guide";
const LOGO_SRC: &str = "/images/logo.svg";
const LOGO_ALT: &str = "Days Out Guide Logo";

pub fn home_content() -> PageContent {
    PageContent {
        metadata: PageMetadata {
            title: "Days Out Guide | Discover Amazing Destinations by Train".to_owned(),
            description: "Find the perfect day out destinations accessible by train. Explore cities, attractions, and hidden gems across the country.".to_owned(),
            keywords: Some(
                ["days out", "train travel", "destinations", "attractions", "day trips"]
                    .iter()
                    .map(|k| k.to_string())
                    .collect(),
            ),
        },
        header: HeaderContent {
            logo: Image { src: LOGO_SRC.to_owned(), alt: LOGO_ALT.to_owned() },
            navigation: vec![
                NavigationItem::new("Destinations", "/destinations").with_children(vec![
                    NavigationItem::new("Cities", "/destinations/cities"),
                    NavigationItem::new("Attractions", "/destinations/attractions"),
                    NavigationItem::new("Hidden Gems", "/destinations/hidden-gems"),
                ]),
                NavigationItem::new("About", "/about"),
                NavigationItem::new("Contact", "/contact"),
            ],
            cta_button: Some(cta("Plan Your Journey", "/plan-journey")),
        },
        hero: HeroContent {
            title: "Discover Amazing Days Out by Train".to_owned(),
            subtitle: "Explore the best destinations across the country with our curated guide to unforgettable experiences".to_owned(),
            background_image: "/images/hero-bg.jpg".to_owned(),
            cta_button: cta("Browse Destinations", "/destinations"),
        },
        featured_destinations: FeaturedDestinations {
            title: "Popular Destinations".to_owned(),
            destinations: vec![
                destination(
                    "London",
                    "Explore the capital's world-class museums, historic landmarks, and vibrant culture.",
                    "london",
                ),
                destination(
                    "Edinburgh",
                    "Discover the historic charm of Scotland's capital with its stunning architecture and rich heritage.",
                    "edinburgh",
                ),
                destination(
                    "Bath",
                    "Experience the Georgian elegance and Roman heritage of this beautiful city.",
                    "bath",
                ),
            ],
        },
        footer: FooterContent {
            sections: vec![
                FooterSection {
                    title: "Quick Links".to_owned(),
                    links: vec![
                        link("Destinations", "/destinations"),
                        link("About Us", "/about"),
                        link("Contact", "/contact"),
                    ],
                },
                FooterSection {
                    title: "Help & Support".to_owned(),
                    links: vec![
                        link("Plan Your Journey", "/plan-journey"),
                        link("FAQs", "/faqs"),
                        link("Terms & Conditions", "/terms"),
                    ],
                },
            ],
            copyright: format!("© 2024 {}. All rights reserved.", SITE_NAME),
            social_links: vec![
                social("Twitter", "https://twitter.com/daysoutguide", "twitter"),
                social("Facebook", "https://facebook.com/daysoutguide", "facebook"),
                social("Instagram", "https://instagram.com/daysoutguide", "instagram"),
            ],
        },
    }
}

/// Minimal chrome for the failure view: logo, no navigation, a way home.
pub fn fallback_content() -> FallbackContent {
    FallbackContent {
        header: HeaderContent {
            logo: Image { src: LOGO_SRC.to_owned(), alt: LOGO_ALT.to_owned() },
            navigation: Vec::new(),
            cta_button: Some(cta("Home", "/")),
        },
        footer: FooterContent {
            sections: Vec::new(),
            copyright: format!("© 2024 {}", SITE_NAME),
            social_links: Vec::new(),
        },
    }
}

fn cta(text: &str, url: &str) -> CtaButton {
    CtaButton { text: text.to_owned(), url: url.to_owned() }
}

fn link(title: &str, url: &str) -> Link {
    Link { title: title.to_owned(), url: url.to_owned() }
}

fn social(platform: &str, url: &str, icon: &str) -> SocialLink {
    SocialLink { platform: platform.to_owned(), url: url.to_owned(), icon: icon.to_owned() }
}

fn destination(title: &str, description: &str, slug: &str) -> Destination {
    Destination {
        title: title.to_owned(),
        description: description.to_owned(),
        image: format!("/images/destinations/{}.jpg", slug),
        url: format!("/destinations/{}", slug),
    }
}
