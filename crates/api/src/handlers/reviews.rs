//! Handlers for submitting and listing book reviews.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bookreviews_core::review::{validate_review, ReviewSubmission};
use bookreviews_db::models::review::Review;
use bookreviews_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::nonce::VerifiedNonce;
use crate::response::{Envelope, SubmittedReview};
use crate::state::AppState;

/// Message returned after a review is stored.
pub const SUBMITTED_MESSAGE: &str = "Review submitted successfully!";

/// POST /reviews
///
/// Sanitize, validate and store a review. Responds with the new id.
pub async fn submit_review(
    _nonce: VerifiedNonce,
    State(state): State<AppState>,
    body: Result<Json<ReviewSubmission>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Envelope<SubmittedReview>>)> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let review = validate_review(&input)?;

    let stored = ReviewRepo::create(&state.pool, &review).await?;

    tracing::info!(
        review_id = stored.id,
        rating = stored.rating,
        "Review submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(SubmittedReview {
            message: SUBMITTED_MESSAGE,
            id: stored.id,
        })),
    ))
}

/// GET /reviews
///
/// All reviews, newest first.
pub async fn list_reviews(
    _nonce: VerifiedNonce,
    State(state): State<AppState>,
) -> AppResult<Json<Envelope<Vec<Review>>>> {
    let reviews = ReviewRepo::list_all(&state.pool).await?;
    tracing::debug!(result_count = reviews.len(), "Listed reviews");
    Ok(Json(Envelope::ok(reviews)))
}
