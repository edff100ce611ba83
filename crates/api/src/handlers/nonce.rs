use axum::extract::State;
use axum::Json;
use bookreviews_core::nonce::REVIEWS_ACTION;

use crate::response::{Envelope, IssuedNonce};
use crate::state::AppState;

/// GET /nonce
///
/// Issue an anti-forgery token for the review operations. The token is
/// guaranteed valid for at least half the configured lifetime.
pub async fn issue_nonce(State(state): State<AppState>) -> Json<Envelope<IssuedNonce>> {
    let config = &state.config.nonce;
    Json(Envelope::ok(IssuedNonce {
        nonce: config.issue(REVIEWS_ACTION, chrono::Utc::now()),
        expires_in_secs: config.lifetime_secs / 2,
    }))
}
