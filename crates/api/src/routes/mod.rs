pub mod books;
pub mod health;
pub mod reviews;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /nonce                 issue anti-forgery token (GET)
///
/// /books/search          catalog search (POST, nonce required)
///
/// /reviews               list (GET), submit (POST), nonce required
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/nonce", get(handlers::nonce::issue_nonce))
        .nest("/books", books::router())
        .nest("/reviews", reviews::router())
}
