#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bookreviews_api::config::ServerConfig;
use bookreviews_api::middleware::nonce::NONCE_HEADER;
use bookreviews_api::router::build_app_router;
use bookreviews_api::state::AppState;
use bookreviews_catalog::{BookCatalog, CatalogBook, CatalogConfig, CatalogError};
use bookreviews_core::nonce::{NonceConfig, REVIEWS_ACTION};
use bookreviews_db::DbPool;

pub const TEST_SECRET: &str = "test-nonce-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        catalog: CatalogConfig::default(),
        catalog_result_limit: 10,
        nonce: NonceConfig {
            secret: TEST_SECRET.to_string(),
            lifetime_secs: 86_400,
        },
    }
}

/// A nonce that the test app accepts right now.
pub fn valid_nonce() -> String {
    test_config()
        .nonce
        .issue(REVIEWS_ACTION, chrono::Utc::now())
}

// ---------------------------------------------------------------------------
// Stub catalog
// ---------------------------------------------------------------------------

/// What the stub catalog answers with.
pub enum StubReply {
    Books(Vec<CatalogBook>),
    Unavailable,
    Format,
}

/// In-process [`BookCatalog`] that records every query it receives.
pub struct StubCatalog {
    reply: StubReply,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl StubCatalog {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookCatalog for StubCatalog {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<CatalogBook>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        match &self.reply {
            StubReply::Books(books) => Ok(books.iter().take(limit).cloned().collect()),
            StubReply::Unavailable => Err(CatalogError::HttpStatus { status: 503 }),
            StubReply::Format => Err(CatalogError::Format("missing docs".to_string())),
        }
    }
}

pub fn book(title: &str, author: &str) -> CatalogBook {
    CatalogBook {
        title: title.to_string(),
        author: author.to_string(),
        first_publish_year: None,
        cover_id: None,
        openlibrary_id: None,
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// A migrated in-memory database.
pub async fn test_pool() -> DbPool {
    let pool = bookreviews_db::create_in_memory_pool().await.unwrap();
    bookreviews_db::run_migrations(&pool).await.unwrap();
    pool
}

/// Build the full application router over `pool` and `catalog`, using the
/// same middleware stack as production.
pub fn build_test_app(pool: DbPool, catalog: Arc<StubCatalog>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// GET `uri` without a nonce.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET `uri` carrying `nonce`.
pub async fn get_with_nonce(app: Router, uri: &str, nonce: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(NONCE_HEADER, nonce)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw body to `uri`, optionally carrying `nonce`.
pub async fn post_raw(app: Router, uri: &str, body: String, nonce: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(nonce) = nonce {
        builder = builder.header(NONCE_HEADER, nonce);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// POST JSON to `uri` with a valid nonce.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string(), Some(&valid_nonce())).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// App over a fresh database with a catalog that finds nothing.
pub async fn default_app() -> Router {
    build_test_app(test_pool().await, StubCatalog::new(StubReply::Books(vec![])))
}
