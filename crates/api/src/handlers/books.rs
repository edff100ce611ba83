//! Handler for the book catalog search proxy.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use bookreviews_catalog::CatalogBook;
use bookreviews_core::search::validate_search_query;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::nonce::VerifiedNonce;
use crate::response::Envelope;
use crate::state::AppState;

/// Request body for a catalog search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
}

/// POST /books/search
///
/// Validate the query, then search the external catalog. Short or empty
/// queries never reach the catalog.
pub async fn search_books(
    _nonce: VerifiedNonce,
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<Envelope<Vec<CatalogBook>>>> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let query = validate_search_query(input.query.as_deref().unwrap_or_default())?;

    let books = state
        .catalog
        .search(&query, state.config.catalog_result_limit)
        .await?;

    tracing::debug!(query = %query, result_count = books.len(), "Catalog search completed");

    Ok(Json(Envelope::ok(books)))
}
