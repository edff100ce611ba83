//! Anti-forgery token extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bookreviews_core::nonce::REVIEWS_ACTION;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the anti-forgery token.
pub const NONCE_HEADER: &str = "x-review-nonce";

/// Proof that the request carried a valid anti-forgery token.
///
/// Place it before any body extractor so the token is checked first:
///
/// ```ignore
/// async fn my_handler(_nonce: VerifiedNonce, Json(body): Json<Input>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VerifiedNonce;

impl FromRequestParts<AppState> for VerifiedNonce {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let nonce = parts
            .headers
            .get(NONCE_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        state
            .config
            .nonce
            .verify(REVIEWS_ACTION, nonce, chrono::Utc::now())
            .map_err(|err| {
                tracing::warn!(
                    method = %parts.method,
                    path = %parts.uri.path(),
                    error = %err,
                    "Rejected request with bad nonce",
                );
                AppError::Core(err)
            })?;

        Ok(VerifiedNonce)
    }
}
