//! External book catalog search.
//!
//! [`BookCatalog`] is the seam the HTTP layer searches through;
//! [`OpenLibraryClient`] is the production implementation. Results are
//! produced fresh on every call and never cached.
//!
//! Search results carry only the raw `cover_id`. Presentation code turns it
//! into an image URL with [`CatalogBook::cover_url`] (or [`cover_url`]); the
//! JSON API never serializes the URL itself.

use async_trait::async_trait;
use serde::Serialize;

pub mod client;
pub mod dto;
pub mod error;

pub use client::{CatalogConfig, OpenLibraryClient};
pub use error::CatalogError;

/// Cover image URL pattern; `{id}` is the upstream `cover_i` value.
pub const COVER_URL_TEMPLATE: &str = "https://covers.openlibrary.org/b/id/{id}-M.jpg";

/// Image shown when a book has no cover.
pub const PLACEHOLDER_COVER_URL: &str = "https://placehold.co/128x193/cccccc/333333?text=No+Cover";

/// A book as returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogBook {
    pub title: String,
    /// First listed author only.
    pub author: String,
    pub first_publish_year: Option<i32>,
    pub cover_id: Option<i64>,
    /// Work id with the `/works/` prefix removed, e.g. `OL893415W`.
    pub openlibrary_id: Option<String>,
}

impl CatalogBook {
    /// Cover image URL for display, falling back to [`PLACEHOLDER_COVER_URL`].
    pub fn cover_url(&self) -> String {
        cover_url(self.cover_id)
    }
}

/// A searchable book catalog.
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Search for books matching an already-validated `query`, returning at
    /// most `limit` results in upstream order.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<CatalogBook>, CatalogError>;
}

/// Medium-size cover URL for a cover id, or the placeholder image.
///
/// Presentation-layer helper; the search endpoint returns `cover_id` only.
pub fn cover_url(cover_id: Option<i64>) -> String {
    match cover_id {
        Some(id) => COVER_URL_TEMPLATE.replace("{id}", &id.to_string()),
        None => PLACEHOLDER_COVER_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_url_uses_medium_size() {
        assert_eq!(
            cover_url(Some(258027)),
            "https://covers.openlibrary.org/b/id/258027-M.jpg"
        );
    }

    #[test]
    fn cover_url_falls_back_to_placeholder() {
        assert_eq!(cover_url(None), PLACEHOLDER_COVER_URL);
    }

    #[test]
    fn book_cover_url_follows_cover_id() {
        let mut book = CatalogBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            first_publish_year: Some(1965),
            cover_id: Some(258027),
            openlibrary_id: None,
        };
        assert_eq!(
            book.cover_url(),
            "https://covers.openlibrary.org/b/id/258027-M.jpg"
        );

        book.cover_id = None;
        assert_eq!(book.cover_url(), PLACEHOLDER_COVER_URL);
    }

    #[test]
    fn catalog_book_serializes_with_snake_case_fields() {
        let book = CatalogBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            first_publish_year: None,
            cover_id: Some(1),
            openlibrary_id: Some("OL893415W".to_string()),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["openlibrary_id"], "OL893415W");
        assert_eq!(json["cover_id"], 1);
        assert!(json["first_publish_year"].is_null());
        assert!(json.get("cover_url").is_none());
    }
}
