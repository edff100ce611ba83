use std::sync::Arc;

use bookreviews_catalog::BookCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bookreviews_db::DbPool,
    /// Server configuration, including the nonce secret.
    pub config: Arc<ServerConfig>,
    /// External book catalog used by the search endpoint.
    pub catalog: Arc<dyn BookCatalog>,
}
