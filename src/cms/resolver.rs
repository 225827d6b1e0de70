use tracing::debug;

use crate::cms::client::CmsClient;
use crate::cms::types::{CmsNode, VersionList};
use crate::error::CmsError;
use crate::utils::constants::PUBLISHED_STATUS;

impl CmsClient {
    /// Content key of a reference; bare keys are returned unchanged.
    pub fn reference_key<'a>(&self, reference: &'a str) -> &'a str {
        reference
            .strip_prefix(self.cfg.reference_prefix.as_str())
            .unwrap_or(reference)
    }

    /// Latest published node behind a reference, cached per content key.
    pub async fn resolve_reference(&self, reference: &str) -> Result<CmsNode, CmsError> {
        let key = checked_key(self.reference_key(reference))?;

        if let Some(node) = self.nodes.get(key).await {
            return Ok(node);
        }

        let node = self.get_latest_published_version(key).await?;
        self.nodes.set(key, node.clone()).await;
        Ok(node)
    }

    /// Fetch the node of the last published version the CMS lists for `key`.
    ///
    /// "Latest" is the last item of the list as ordered by the CMS; version
    /// numbers are not compared.
    pub async fn get_latest_published_version(&self, key: &str) -> Result<CmsNode, CmsError> {
        let key = checked_key(key)?;
        let versions: VersionList = self
            .fetch_node(&format!("/content/{}/versions?statuses={}", key, PUBLISHED_STATUS))
            .await?;

        let latest = versions
            .items
            .last()
            .ok_or_else(|| CmsError::NotFound(key.to_owned()))?;
        debug!(
            "content {} has {} published versions, using {}",
            key,
            versions.items.len(),
            latest.version
        );

        self.fetch_node(&format!("/content/{}/versions/{}", key, latest.version))
            .await
    }

    /// Absolute url of the asset behind an image reference.
    pub async fn resolve_image(&self, reference: &str) -> Result<String, CmsError> {
        let node = self.resolve_reference(reference).await?;
        let route_segment = node
            .route_segment
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| CmsError::MissingRouteSegment(node.key.clone()))?;

        Ok(format!(
            "{}/{}",
            self.cfg.asset_base_url(),
            route_segment.trim_start_matches('/')
        ))
    }
}

/// Keys are spliced into api paths and must stay within one segment.
fn checked_key(key: &str) -> Result<&str, CmsError> {
    let escapes = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '?', '#']);
    if escapes {
        return Err(CmsError::InvalidKey(key.to_owned()));
    }
    Ok(key)
}
