//! Book review model.

use serde::Serialize;
use sqlx::FromRow;
use bookreviews_core::types::{DbId, Timestamp};

/// A row from the `book_reviews` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Review {
    pub id: DbId,
    pub book_title: String,
    pub reviewer_name: String,
    pub review_text: String,
    pub rating: i64,
    pub book_openlibrary_id: Option<String>,
    pub review_date: Timestamp,
}
