//! Route definitions for the catalog search proxy.
//!
//! Mounted at `/books` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Book routes.
///
/// ```text
/// POST   /search             -> search_books
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/search", post(books::search_books))
}
