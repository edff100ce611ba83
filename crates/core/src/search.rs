//! Catalog search query validation.
//!
//! The catalog proxy makes a network call per query, so queries are gated
//! here before any request leaves the process.

use crate::error::CoreError;
use crate::sanitize::sanitize_text_field;

/// Minimum number of characters (after trimming) a query must contain.
pub const MIN_QUERY_LENGTH: usize = 3;

/// Default number of catalog results returned per search.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Sanitize a search query and enforce the minimum length.
///
/// Length is counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use bookreviews_core::search::validate_search_query;
/// assert_eq!(validate_search_query("  dune ").unwrap(), "dune");
/// assert!(validate_search_query("du").is_err());
/// ```
pub fn validate_search_query(raw: &str) -> Result<String, CoreError> {
    let query = sanitize_text_field(raw);

    if query.is_empty() {
        return Err(CoreError::InvalidQuery(
            "Search query cannot be empty.".to_string(),
        ));
    }
    if query.chars().count() < MIN_QUERY_LENGTH {
        return Err(CoreError::InvalidQuery(format!(
            "Search query must be at least {MIN_QUERY_LENGTH} characters."
        )));
    }

    Ok(query)
}
