//! Shared response envelope types for API handlers.
//!
//! Every operation answers with `{ "success": bool, "data": ... }`. On
//! success `data` is the operation's payload; on failure it is an
//! [`ErrorBody`] carrying a human-readable message and a stable code.

use serde::Serialize;

/// Standard `{ "success": bool, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok(reviews)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a successful payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl Envelope<ErrorBody> {
    /// Wrap a failure description.
    pub fn failure(error: ErrorBody) -> Self {
        Self {
            success: false,
            data: error,
        }
    }
}

/// Failure payload: what went wrong, for display, plus a machine-readable code.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
}

/// Payload returned after a review is stored.
#[derive(Debug, Serialize)]
pub struct SubmittedReview {
    pub message: &'static str,
    pub id: bookreviews_core::types::DbId,
}

/// Payload returned by the nonce endpoint.
#[derive(Debug, Serialize)]
pub struct IssuedNonce {
    pub nonce: String,
    /// Minimum number of seconds the nonce stays valid.
    pub expires_in_secs: i64,
}
