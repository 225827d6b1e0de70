use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{info, warn};

use crate::error::ContentError;
use crate::server::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/content/{page_id}", get(get_page))
        .route("/cache/clear", post(clear_cache))
        .route("/health", get(health))
}

/// Assembled page as JSON. Fetch failures answer 502 with the fallback
/// header/footer so a renderer can still draw its failure view.
async fn get_page(State(state): State<AppState>, Path(page_id): Path<String>) -> Response {
    info!("page request: {}", page_id);
    match state.content.get_page_content(&page_id).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(ContentError::UnknownPage(page_id)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("content not found for page: {}", page_id) })),
        )
            .into_response(),
        Err(err) => {
            warn!("serving failure view: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "We're sorry, but we couldn't load the content. Please try again.",
                    "fallback": state.content.fallback_content(),
                })),
            )
                .into_response()
        }
    }
}

async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.content.clear_cache().await;
    StatusCode::NO_CONTENT
}

async fn health() -> &'static str {
    "ok"
}
