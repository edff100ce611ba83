//! HTTP client for the Open Library search endpoint.
//!
//! Issues one `GET {search_url}?q=...` per search with a bounded timeout.
//! There are no retries and no caching: every call goes upstream.

use std::time::Duration;

use async_trait::async_trait;

use crate::dto::books_from_response;
use crate::error::CatalogError;
use crate::{BookCatalog, CatalogBook};

/// Public Open Library search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://openlibrary.org/search.json";

/// Timeout for a single search request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`OpenLibraryClient`].
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Full URL of the search endpoint.
    pub search_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header identifying this service to Open Library.
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("BookReviews/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Catalog backed by the Open Library search API.
pub struct OpenLibraryClient {
    client: reqwest::Client,
    search_url: String,
}

impl OpenLibraryClient {
    /// Build a client with its own connection pool, timeout and user agent.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self::with_client(client, config.search_url.clone()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, search_url: String) -> Self {
        Self { client, search_url }
    }
}

#[async_trait]
impl BookCatalog for OpenLibraryClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<CatalogBook>, CatalogError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let books = books_from_response(body, limit)?;

        tracing::debug!(query, result_count = books.len(), "Catalog search completed");
        Ok(books)
    }
}
