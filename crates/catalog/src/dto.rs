//! Open Library search response shapes and their mapping to [`CatalogBook`].
//!
//! Entries are read field by field. Inclusion depends only on a title and a
//! first author; an optional field with an unexpected type becomes `None`
//! instead of discarding the whole entry.

use serde_json::Value;

use crate::error::CatalogError;
use crate::CatalogBook;

/// Prefix Open Library puts on work keys (`/works/OL893415W`).
pub const WORK_KEY_PREFIX: &str = "/works/";

/// Map one entry of the upstream `docs` array to a [`CatalogBook`], or
/// `None` when it lacks a string title or a string first author.
pub fn book_from_doc(doc: &Value) -> Option<CatalogBook> {
    let title = non_blank(doc.get("title"))?;
    let author = non_blank(doc.get("author_name").and_then(|names| names.get(0)))?;

    Some(CatalogBook {
        title,
        author,
        first_publish_year: doc
            .get("first_publish_year")
            .and_then(Value::as_i64)
            .and_then(|year| i32::try_from(year).ok()),
        cover_id: doc.get("cover_i").and_then(Value::as_i64),
        openlibrary_id: doc
            .get("key")
            .and_then(Value::as_str)
            .map(|key| strip_work_prefix(key).to_string()),
    })
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Strip the `/works/` prefix from an Open Library key.
pub fn strip_work_prefix(key: &str) -> &str {
    key.strip_prefix(WORK_KEY_PREFIX).unwrap_or(key)
}

/// Extract books from a decoded search response body.
///
/// Fails with [`CatalogError::Format`] when the body has no `docs` array.
/// Otherwise filters unusable entries and keeps at most `limit` books in
/// upstream order.
pub fn books_from_response(body: Value, limit: usize) -> Result<Vec<CatalogBook>, CatalogError> {
    let docs = match body {
        Value::Object(mut map) => match map.remove("docs") {
            Some(Value::Array(docs)) => docs,
            _ => {
                return Err(CatalogError::Format(
                    "response has no 'docs' array".to_string(),
                ))
            }
        },
        _ => {
            return Err(CatalogError::Format(
                "response is not a JSON object".to_string(),
            ))
        }
    };

    Ok(docs
        .iter()
        .filter_map(book_from_doc)
        .take(limit)
        .collect())
}
