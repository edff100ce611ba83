//! Route definitions for book reviews.
//!
//! Mounted at `/reviews` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Review routes.
///
/// ```text
/// GET    /                   -> list_reviews
/// POST   /                   -> submit_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(reviews::list_reviews).post(reviews::submit_review))
}
