/// Domain-level failures raised before anything touches storage or the network.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The anti-forgery token was missing, malformed, or expired.
    #[error("Security check failed: {0}")]
    SecurityCheckFailed(String),

    /// A catalog search query that is empty or too short to send upstream.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A review submission with missing or out-of-range fields.
    #[error("Validation failed: {0}")]
    Validation(String),
}
