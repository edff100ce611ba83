//! Repository for the `book_reviews` table.
//!
//! Reviews are append-only; rows are never updated or deleted here.

use bookreviews_core::review::NewReview;
use bookreviews_core::types::Timestamp;
use sqlx::SqlitePool;

use crate::models::review::Review;

/// Column list for book_reviews queries.
const COLUMNS: &str =
    "id, book_title, reviewer_name, review_text, rating, book_openlibrary_id, review_date";

/// Provides insert and listing operations for book reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a validated review stamped with the current time, returning
    /// the stored row (including its assigned `id`).
    pub async fn create(pool: &SqlitePool, input: &NewReview) -> Result<Review, sqlx::Error> {
        Self::create_at(pool, input, chrono::Utc::now()).await
    }

    /// Insert a validated review with an explicit `review_date`.
    pub async fn create_at(
        pool: &SqlitePool,
        input: &NewReview,
        review_date: Timestamp,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO book_reviews
                (book_title, reviewer_name, review_text, rating, book_openlibrary_id, review_date)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&input.book_title)
            .bind(&input.reviewer_name)
            .bind(&input.review_text)
            .bind(input.rating)
            .bind(&input.book_openlibrary_id)
            .bind(review_date)
            .fetch_one(pool)
            .await
    }

    /// List every review, newest first. Reviews sharing a timestamp are
    /// ordered by descending id (most recently inserted first).
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM book_reviews
             ORDER BY review_date DESC, id DESC"
        );
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// Count stored reviews.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM book_reviews")
            .fetch_one(pool)
            .await
    }
}
