//! Integration tests for the catalog search endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, book, post_json, StubCatalog, StubReply};
use serde_json::json;

async fn search(catalog: Arc<StubCatalog>, query: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let app = common::build_test_app(common::test_pool().await, catalog);
    let response = post_json(app, "/api/v1/books/search", json!({ "query": query })).await;
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Query validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_query_never_reaches_catalog() {
    let catalog = StubCatalog::new(StubReply::Books(vec![book("Dune", "Frank Herbert")]));

    let (status, json) = search(catalog.clone(), json!("   ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["data"]["code"], "INVALID_QUERY");
    assert_eq!(json["data"]["message"], "Search query cannot be empty.");
    assert_eq!(catalog.call_count(), 0);
}

#[tokio::test]
async fn short_query_never_reaches_catalog() {
    let catalog = StubCatalog::new(StubReply::Books(vec![book("Dune", "Frank Herbert")]));

    let (status, json) = search(catalog.clone(), json!(" du ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["data"]["code"], "INVALID_QUERY");
    assert_eq!(
        json["data"]["message"],
        "Search query must be at least 3 characters."
    );
    assert_eq!(catalog.call_count(), 0);
}

#[tokio::test]
async fn missing_query_field_is_invalid_query() {
    let catalog = StubCatalog::new(StubReply::Books(vec![]));
    let app = common::build_test_app(common::test_pool().await, catalog.clone());

    let response = post_json(app, "/api/v1/books/search", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["data"]["code"], "INVALID_QUERY");
    assert_eq!(catalog.call_count(), 0);
}

// ---------------------------------------------------------------------------
// Successful searches
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_returns_catalog_books() {
    let mut dune = book("Dune", "Frank Herbert");
    dune.cover_id = Some(258027);
    dune.openlibrary_id = Some("OL893415W".to_string());
    dune.first_publish_year = Some(1965);
    let catalog = StubCatalog::new(StubReply::Books(vec![dune]));

    let (status, json) = search(catalog.clone(), json!("  dune ")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(
        json["data"],
        json!([{
            "title": "Dune",
            "author": "Frank Herbert",
            "first_publish_year": 1965,
            "cover_id": 258027,
            "openlibrary_id": "OL893415W",
        }])
    );
    assert_eq!(catalog.queries(), ["dune"]);
}

#[tokio::test]
async fn search_with_no_matches_is_success() {
    let catalog = StubCatalog::new(StubReply::Books(vec![]));

    let (status, json) = search(catalog, json!("zzzzqqq")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn search_results_are_capped_at_configured_limit() {
    let books = (0..25).map(|i| book(&format!("Book {i}"), "Someone")).collect();
    let catalog = StubCatalog::new(StubReply::Books(books));

    let (_, json) = search(catalog, json!("book")).await;

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 10);
    assert_eq!(data[0]["title"], "Book 0");
    assert_eq!(data[9]["title"], "Book 9");
}

// ---------------------------------------------------------------------------
// Upstream failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unavailable_catalog_maps_to_bad_gateway() {
    let catalog = StubCatalog::new(StubReply::Unavailable);

    let (status, json) = search(catalog, json!("dune")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["success"], false);
    assert_eq!(json["data"]["code"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn malformed_catalog_response_maps_to_format_error() {
    let catalog = StubCatalog::new(StubReply::Format);

    let (status, json) = search(catalog, json!("dune")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["data"]["code"], "UPSTREAM_FORMAT_ERROR");
}
