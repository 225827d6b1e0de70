use anyhow::Result;
use axum::Router;
use tracing::info;
use crate::config::settings::SettingsConfig;
use crate::content::service::ContentService;
use crate::observability::metrics::get_metrics;
use crate::observability::routes::MetricsState;
use crate::server::content_routes;

#[derive(Clone)]
pub struct AppState {
    pub metrics_state: MetricsState,
    pub content: ContentService,
}

impl AppState {
    pub async fn new(content: ContentService) -> Self {
        let metrics = get_metrics().await;
        Self {
            metrics_state: MetricsState::new(metrics.registry.clone()),
            content,
        }
    }
}

pub fn router(settings_config: &SettingsConfig, state: AppState) -> Router {
    Router::new()
        .merge(content_routes::router())
        .merge(state.metrics_state.router(&settings_config.metrics))
        .with_state(state)
}

/// Serve content and metrics until ctrl-c.
pub async fn start(settings_config: &SettingsConfig, content: ContentService) -> Result<()> {
    let state = AppState::new(content).await;
    let app = router(settings_config, state);

    let bind_addr = format!("{}:{}", settings_config.server.host, settings_config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("listening on {}", bind_addr);
    get_metrics().await.up.set(1);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    get_metrics().await.up.set(0);
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
