/// Errors from the external catalog search.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout) or the
    /// body could not be read as JSON.
    #[error("Catalog request failed: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The catalog answered with a non-2xx status code.
    #[error("Catalog returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The body was JSON but lacked the expected `docs` array.
    #[error("Unexpected catalog response format: {0}")]
    Format(String),
}

impl CatalogError {
    /// Whether this failure means the catalog could not be reached or read,
    /// as opposed to answering with an unexpected shape.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::HttpStatus { .. })
    }
}
