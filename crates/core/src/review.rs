//! Review submission constants and validation.
//!
//! A [`ReviewSubmission`] is whatever the client sent; [`validate_review`]
//! turns it into a sanitized [`NewReview`] or a [`CoreError::Validation`].

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::sanitize::{sanitize_text_field, sanitize_textarea_field};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Lowest accepted star rating.
pub const MIN_RATING: i64 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i64 = 5;

/// Message returned when a field is blank after sanitizing or the rating is
/// outside the allowed range.
pub const INVALID_FIELDS_MESSAGE: &str =
    "Please fill in all required fields correctly (rating must be 1-5).";

/* --------------------------------------------------------------------------
Types
-------------------------------------------------------------------------- */

/// Raw review payload as submitted by the client.
///
/// Every field is optional so that missing fields surface as a validation
/// failure rather than a deserialization error. `rating` is kept as a raw
/// JSON value because form-driven clients send it as a string.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ReviewSubmission {
    pub book_title: Option<String>,
    pub reviewer_name: Option<String>,
    pub review_text: Option<String>,
    pub rating: Option<serde_json::Value>,
    pub book_openlibrary_id: Option<String>,
}

/// A sanitized, validated review ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewReview {
    #[validate(length(min = 1, message = "Book title is required"))]
    pub book_title: String,
    #[validate(length(min = 1, message = "Reviewer name is required"))]
    pub reviewer_name: String,
    #[validate(length(min = 1, message = "Review text is required"))]
    pub review_text: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,
    pub book_openlibrary_id: Option<String>,
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Sanitize and validate a review submission.
pub fn validate_review(submission: &ReviewSubmission) -> Result<NewReview, CoreError> {
    let (Some(title), Some(name), Some(text), Some(rating)) = (
        submission.book_title.as_deref(),
        submission.reviewer_name.as_deref(),
        submission.review_text.as_deref(),
        submission.rating.as_ref(),
    ) else {
        return Err(CoreError::Validation(
            "Missing required fields for review submission.".to_string(),
        ));
    };

    let review = NewReview {
        book_title: sanitize_text_field(title),
        reviewer_name: sanitize_text_field(name),
        review_text: sanitize_textarea_field(text),
        rating: parse_rating(rating)?,
        book_openlibrary_id: submission
            .book_openlibrary_id
            .as_deref()
            .map(sanitize_text_field)
            .filter(|id| !id.is_empty()),
    };

    review
        .validate()
        .map_err(|_| CoreError::Validation(INVALID_FIELDS_MESSAGE.to_string()))?;

    Ok(review)
}

/// Parse a rating from a JSON integer or a numeric string.
///
/// Range checking happens in [`validate_review`]; this only rejects values
/// that are not whole numbers.
pub fn parse_rating(value: &serde_json::Value) -> Result<i64, CoreError> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        CoreError::Validation(format!(
            "Rating must be a whole number between {MIN_RATING} and {MAX_RATING}"
        ))
    })
}
