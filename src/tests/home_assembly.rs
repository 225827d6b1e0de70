#[cfg(test)]
mod test {
    use std::time::{Duration, Instant};

    use crate::cms::client::CmsClient;
    use crate::error::CmsError;
    use crate::tests::common::{image_node, mock_cms_with_home, HOME_KEY};

    #[tokio::test]
    async fn destinations_keep_input_order_despite_completion_order() {
        let cms = mock_cms_with_home(&["a", "b", "c"]).await;
        cms.state.put_delayed_node("a", image_node("a", "a.jpg"), 30);
        cms.state.put_delayed_node("b", image_node("b", "b.jpg"), 10);
        cms.state.put_delayed_node("c", image_node("c", "c.jpg"), 20);
        let client = CmsClient::new(cms.config()).unwrap();

        let page = client.get_home_content().await.unwrap();

        let titles: Vec<&str> = page
            .featured_destinations
            .destinations
            .iter()
            .map(|d| d.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        let images: Vec<String> = page
            .featured_destinations
            .destinations
            .iter()
            .map(|d| d.image.clone())
            .collect();
        let base = cms.asset_base_url();
        assert_eq!(
            images,
            vec![format!("{base}/a.jpg"), format!("{base}/b.jpg"), format!("{base}/c.jpg")]
        );
    }

    #[tokio::test]
    async fn destination_images_are_resolved_concurrently() {
        let cms = mock_cms_with_home(&["a", "b", "c"]).await;
        cms.state.put_delayed_node("a", image_node("a", "a.jpg"), 300);
        cms.state.put_delayed_node("b", image_node("b", "b.jpg"), 100);
        cms.state.put_delayed_node("c", image_node("c", "c.jpg"), 200);
        let client = CmsClient::new(cms.config()).unwrap();

        let start = Instant::now();
        let page = client.get_home_content().await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(page.featured_destinations.destinations.len(), 3);
        assert_eq!(cms.state.peak_in_flight(), 3);
        // one at a time would take at least 600ms
        assert!(elapsed < Duration::from_millis(550), "took {elapsed:?}");
    }

    #[tokio::test]
    async fn home_page_has_only_absolute_image_urls() {
        let cms = mock_cms_with_home(&["london"]).await;
        let client = CmsClient::new(cms.config()).unwrap();

        let page = client.get_home_content().await.unwrap();

        let base = cms.asset_base_url();
        assert_eq!(page.header.logo.src, format!("{base}/logo.svg"));
        assert_eq!(page.hero.background_image, format!("{base}/hero-bg.jpg"));
        for url in page.image_urls() {
            assert!(url.starts_with(&base), "{url} is not an asset url");
        }
        let serialized = serde_json::to_string(&page).unwrap();
        assert!(!serialized.contains("cms://"), "unresolved reference in {serialized}");

        // passed through untouched
        assert_eq!(page.header.navigation.len(), 1);
        assert_eq!(page.header.navigation[0].children.as_ref().unwrap()[0].url, "/destinations/cities");
        assert_eq!(page.header.logo.alt, "Days Out Guide");
        assert_eq!(page.footer.social_links[0].platform, "Twitter");
        assert_eq!(page.metadata.keywords, Some(vec!["days out".to_string()]));
    }

    #[tokio::test]
    async fn failing_destination_aborts_whole_page() {
        let cms = mock_cms_with_home(&["london", "nowhere"]).await;
        cms.state.content.write().unwrap().remove("nowhere");
        let client = CmsClient::new(cms.config()).unwrap();

        let err = client.get_home_content().await.unwrap_err();

        assert!(matches!(err, CmsError::Upstream { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn malformed_home_node_is_decode_error() {
        let cms = mock_cms_with_home(&[]).await;
        cms.state.put_node(HOME_KEY, image_node(HOME_KEY, "home"));
        let client = CmsClient::new(cms.config()).unwrap();

        let err = client.get_home_content().await.unwrap_err();

        assert!(matches!(err, CmsError::Decode(_)), "got {err:?}");
    }
}
