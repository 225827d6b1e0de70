use futures::future::try_join_all;
use tracing::{error, info};

use crate::cms::client::CmsClient;
use crate::cms::types::{CmsDestination, HomePageCmsProperties};
use crate::content::model::{
    Destination, FeaturedDestinations, HeaderContent, HeroContent, Image, PageContent,
};
use crate::error::CmsError;

impl CmsClient {
    /// Home page with every image reference resolved to an asset url.
    ///
    /// Fails as a whole: no partially resolved page is returned.
    pub async fn get_home_content(&self) -> Result<PageContent, CmsError> {
        self.assemble_home()
            .await
            .inspect_err(|e| error!("error fetching home content from CMS: {}", e))
    }

    async fn assemble_home(&self) -> Result<PageContent, CmsError> {
        let home_key = self.cfg.home_page_key.as_str();
        let node = self.get_latest_published_version(home_key).await?;
        let home = node.into_typed::<HomePageCmsProperties>()?.properties;
        info!(
            "assembling home page {} with {} destinations",
            home_key,
            home.featured_destinations.destinations.len()
        );

        let logo_src = self.resolve_image(&home.header.logo).await?;
        let logo_alt = home
            .header
            .logo_alt
            .unwrap_or_else(|| home.metadata.title.clone());
        let background_image = self.resolve_image(&home.hero.background_image).await?;

        // started together, joined in input order
        let destinations = try_join_all(
            home.featured_destinations
                .destinations
                .into_iter()
                .map(|destination| self.resolve_destination(destination)),
        )
        .await?;

        Ok(PageContent {
            metadata: home.metadata,
            header: HeaderContent {
                logo: Image { src: logo_src, alt: logo_alt },
                navigation: home.header.navigation,
                cta_button: home.header.cta_button,
            },
            hero: HeroContent {
                title: home.hero.title,
                subtitle: home.hero.subtitle,
                background_image,
                cta_button: home.hero.cta_button,
            },
            featured_destinations: FeaturedDestinations {
                title: home.featured_destinations.title,
                destinations,
            },
            footer: home.footer,
        })
    }

    async fn resolve_destination(&self, destination: CmsDestination) -> Result<Destination, CmsError> {
        let image = self.resolve_image(&destination.image).await?;
        Ok(Destination {
            title: destination.title,
            description: destination.description,
            image,
            url: destination.url,
        })
    }
}
