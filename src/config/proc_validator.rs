//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Validates:
//!   * content source selection and the cms block it requires
//!   * cms urls, api prefix and reference prefix shape
//!   * server / metrics / logging settings
//!
//! Missing CMS credentials are only reported as a warning: they are checked
//! again on the first token request.

use tracing::{error, info, warn};

use crate::config::settings::SettingsConfig;
use crate::config::sources::{CmsConfig, ServiceConfig, SourceTypes};
use crate::observability::metrics::get_metrics;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub async fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);

    match (&cfg.content.source_type, &cfg.content.cms) {
        (SourceTypes::Cms, None) => {
            errors.push("content.cms must be provided when content.source is 'cms'".to_string());
        }
        (_, Some(cms)) => validate_cms(cms, &mut errors),
        (SourceTypes::Static, None) => {}
    }

    if errors.is_empty() {
        info!("config valid");
        Ok(())
    } else {
        error!("configuration validation errors ({}):", errors.len());
        for e in &errors {
            error!(" - {}", e);
        }
        get_metrics().await.config_validation_errors.inc();
        Err(errors)
    }
}

/// SETTINGS VALIDATION
fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if settings.server.host.is_empty() {
        errors.push("settings.server.host must not be empty".to_string());
    }
    if settings.server.port == 0 {
        errors.push("settings.server.port must not be 0".to_string());
    }

    if settings.metrics.is_enabled && !settings.metrics.path.starts_with('/') {
        errors.push(format!(
            "settings.metrics.path '{}' must start with '/'",
            settings.metrics.path
        ));
    }

    if let Some(logging) = &settings.logging {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' must be one of {:?}",
                logging.level, LOG_LEVELS
            ));
        }
    }
}

/// CMS VALIDATION
fn validate_cms(cms: &CmsConfig, errors: &mut Vec<String>) {
    if !is_http_url(&cms.api_url) {
        errors.push(format!(
            "content.cms.api_url '{}' must be an absolute http(s) url",
            cms.api_url
        ));
    }

    if let Some(asset_base_url) = cms.asset_base_url.as_deref().filter(|u| !u.is_empty()) {
        if !is_http_url(asset_base_url) {
            errors.push(format!(
                "content.cms.asset_base_url '{}' must be an absolute http(s) url",
                asset_base_url
            ));
        }
    }

    if !cms.api_prefix.is_empty() && (!cms.api_prefix.starts_with('/') || cms.api_prefix.ends_with('/')) {
        errors.push(format!(
            "content.cms.api_prefix '{}' must start with '/' and must not end with '/'",
            cms.api_prefix
        ));
    }

    if cms.reference_prefix.is_empty() {
        errors.push("content.cms.reference_prefix must not be empty".to_string());
    }

    if cms.home_page_key.trim().is_empty() {
        errors.push("content.cms.home_page_key must not be empty".to_string());
    }

    if cms.client_id().is_none() || cms.client_secret().is_none() {
        warn!("content.cms credentials are not configured; token requests will fail");
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
