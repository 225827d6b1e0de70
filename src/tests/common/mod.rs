// tests/common/mod.rs
//! In-process CMS double served by axum on an ephemeral port.

pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::config::sources::CmsConfig;

pub const TEST_CLIENT_ID: &str = "test-client";
pub const TEST_CLIENT_SECRET: &str = "test-secret";
pub const HOME_KEY: &str = "home0000";

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// One content item: published versions in server order, node per version.
#[derive(Clone, Default)]
pub struct MockContent {
    pub versions: Vec<String>,
    pub nodes: HashMap<String, Value>,
    pub delay_ms: u64,
}

pub struct MockCmsState {
    pub token_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub node_calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub peak_in_flight: AtomicUsize,
    /// 401 answers left for content endpoints
    pub unauthorized_left: AtomicUsize,
    pub expires_in: AtomicU64,
    pub token_status: AtomicU16,
    pub seen_tokens: Mutex<Vec<String>>,
    pub content: RwLock<HashMap<String, MockContent>>,
}

impl Default for MockCmsState {
    fn default() -> Self {
        Self {
            token_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            node_calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
            unauthorized_left: AtomicUsize::new(0),
            expires_in: AtomicU64::new(3600),
            token_status: AtomicU16::new(200),
            seen_tokens: Mutex::new(Vec::new()),
            content: RwLock::new(HashMap::new()),
        }
    }
}

impl MockCmsState {
    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn node_calls(&self) -> usize {
        self.node_calls.load(Ordering::SeqCst)
    }

    /// Most node requests served at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub fn seen_tokens(&self) -> Vec<String> {
        self.seen_tokens.lock().unwrap().clone()
    }

    pub fn put(&self, key: &str, content: MockContent) {
        self.content.write().unwrap().insert(key.to_owned(), content);
    }

    /// Single published version "1" holding `node`.
    pub fn put_node(&self, key: &str, node: Value) {
        self.put_delayed_node(key, node, 0);
    }

    pub fn put_delayed_node(&self, key: &str, node: Value, delay_ms: u64) {
        self.put(
            key,
            MockContent {
                versions: vec!["1".to_owned()],
                nodes: HashMap::from([("1".to_owned(), node)]),
                delay_ms,
            },
        );
    }
}

pub struct MockCms {
    pub state: Arc<MockCmsState>,
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockCms {
    pub async fn start() -> Self {
        let state = Arc::new(MockCmsState::default());
        let router = Router::new()
            .route("/_cms/preview2/oauth/token", post(issue_token))
            .route("/_cms/preview2/content/{key}/versions", get(list_versions))
            .route("/_cms/preview2/content/{key}/versions/{version}", get(get_version))
            .with_state(state.clone());
        let (handle, addr) = spawn_axum(router).await;
        Self { state, addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn asset_base_url(&self) -> String {
        format!("{}/globalassets", self.base_url())
    }

    /// Config pointing at this double, credentials included.
    pub fn config(&self) -> CmsConfig {
        let mut cfg = CmsConfig::new(self.base_url()).with_credentials(TEST_CLIENT_ID, TEST_CLIENT_SECRET);
        cfg.home_page_key = HOME_KEY.to_owned();
        cfg
    }
}

impl Drop for MockCms {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn issue_token(State(state): State<Arc<MockCmsState>>, Json(body): Json<Value>) -> Response {
    let n = state.token_calls.fetch_add(1, Ordering::SeqCst) + 1;
    let status = StatusCode::from_u16(state.token_status.load(Ordering::SeqCst)).unwrap();
    if !status.is_success() {
        return (status, "denied").into_response();
    }
    if body["grant_type"] != "client_credentials"
        || body["client_id"] != TEST_CLIENT_ID
        || body["client_secret"] != TEST_CLIENT_SECRET
    {
        return (StatusCode::BAD_REQUEST, "bad credentials").into_response();
    }
    Json(json!({
        "access_token": format!("token-{}", n),
        "token_type": "Bearer",
        "expires_in": state.expires_in.load(Ordering::SeqCst),
    }))
    .into_response()
}

async fn list_versions(
    State(state): State<Arc<MockCmsState>>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.list_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    let content = state.content.read().unwrap().get(&key).cloned();
    match content {
        Some(content) => Json(json!({
            "items": content
                .versions
                .iter()
                .map(|v| json!({ "key": key, "version": v, "status": "published" }))
                .collect::<Vec<_>>()
        }))
        .into_response(),
        None => (StatusCode::NOT_FOUND, "unknown content").into_response(),
    }
}

async fn get_version(
    State(state): State<Arc<MockCmsState>>,
    Path((key, version)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    state.node_calls.fetch_add(1, Ordering::SeqCst);
    if let Some(rejection) = authorize(&state, &headers) {
        return rejection;
    }
    let content = state.content.read().unwrap().get(&key).cloned();
    let Some(content) = content else {
        return (StatusCode::NOT_FOUND, "unknown content").into_response();
    };
    if content.delay_ms > 0 {
        let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        state.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(content.delay_ms)).await;
        state.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
    match content.nodes.get(&version) {
        Some(node) => Json(node.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "unknown version").into_response(),
    }
}

fn authorize(state: &MockCmsState, headers: &HeaderMap) -> Option<Response> {
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.to_owned());
    let Some(token) = token else {
        return Some((StatusCode::UNAUTHORIZED, "missing token").into_response());
    };
    state.seen_tokens.lock().unwrap().push(token);

    let left = state.unauthorized_left.load(Ordering::SeqCst);
    if left > 0 {
        state.unauthorized_left.store(left - 1, Ordering::SeqCst);
        return Some((StatusCode::UNAUTHORIZED, "expired token").into_response());
    }
    None
}

/// Image asset node
pub fn image_node(key: &str, route_segment: &str) -> Value {
    json!({
        "key": key,
        "contentType": ["Image", "Media"],
        "properties": { "altText": key },
        "routeSegment": route_segment,
    })
}

/// Home node referencing `logo`, `hero` and one image per destination.
pub fn home_node(destination_images: &[&str]) -> Value {
    json!({
        "key": HOME_KEY,
        "contentType": ["HomePage"],
        "routeSegment": "home",
        "properties": {
            "metadata": {
                "title": "Days Out Guide",
                "description": "Discover amazing destinations by train",
                "keywords": ["days out"]
            },
            "header": {
                "logo": "cms://content/logo",
                "navigation": [
                    { "title": "Destinations", "url": "/destinations",
                      "children": [{ "title": "Cities", "url": "/destinations/cities" }] }
                ],
                "ctaButton": { "text": "Plan Your Journey", "url": "/plan-journey" }
            },
            "hero": {
                "title": "Discover Amazing Days Out by Train",
                "subtitle": "Explore the best destinations",
                "backgroundImage": "cms://content/hero",
                "ctaButton": { "text": "Browse Destinations", "url": "/destinations" }
            },
            "featuredDestinations": {
                "title": "Popular Destinations",
                "destinations": destination_images
                    .iter()
                    .map(|image| json!({
                        "title": image,
                        "description": format!("About {}", image),
                        "image": format!("cms://content/{}", image),
                        "url": format!("/destinations/{}", image),
                    }))
                    .collect::<Vec<_>>()
            },
            "footer": {
                "sections": [
                    { "title": "Quick Links", "links": [{ "title": "About Us", "url": "/about" }] }
                ],
                "copyright": "© 2024 Days Out Guide. All rights reserved.",
                "socialLinks": [
                    { "platform": "Twitter", "url": "https://twitter.com/daysoutguide", "icon": "twitter" }
                ]
            }
        }
    })
}

/// Mock CMS holding a home page, its logo and hero, and the given
/// destination images.
pub async fn mock_cms_with_home(destination_images: &[&str]) -> MockCms {
    let cms = MockCms::start().await;
    cms.state.put_node(HOME_KEY, home_node(destination_images));
    cms.state.put_node("logo", image_node("logo", "logo.svg"));
    cms.state.put_node("hero", image_node("hero", "hero-bg.jpg"));
    for image in destination_images {
        cms.state.put_node(image, image_node(image, &format!("{}.jpg", image)));
    }
    cms
}
