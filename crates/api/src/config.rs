use std::time::Duration;

use bookreviews_catalog::client::{DEFAULT_SEARCH_URL, DEFAULT_TIMEOUT};
use bookreviews_catalog::CatalogConfig;
use bookreviews_core::nonce::{NonceConfig, DEFAULT_NONCE_LIFETIME_SECS};
use bookreviews_core::search::DEFAULT_RESULT_LIMIT;

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared read-only through [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Outbound catalog client settings.
    pub catalog: CatalogConfig,
    /// Maximum number of books returned per search (default: `10`).
    pub catalog_result_limit: usize,
    /// Anti-forgery nonce secret and lifetime.
    pub nonce: NonceConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                               |
    /// |------------------------|---------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                             |
    /// | `PORT`                 | `3000`                                |
    /// | `DATABASE_URL`         | `sqlite://bookreviews.db?mode=rwc`    |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                  |
    /// | `CATALOG_SEARCH_URL`   | `https://openlibrary.org/search.json` |
    /// | `CATALOG_TIMEOUT_SECS` | `10`                                  |
    /// | `CATALOG_USER_AGENT`   | `BookReviews/<version>`               |
    /// | `CATALOG_RESULT_LIMIT` | `10`                                  |
    /// | `NONCE_SECRET`         | **required**                          |
    /// | `NONCE_LIFETIME_SECS`  | `86400`                               |
    ///
    /// # Panics
    ///
    /// Panics if `NONCE_SECRET` is missing or empty, or if a numeric
    /// variable does not parse.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = env_or("DATABASE_URL", "sqlite://bookreviews.db?mode=rwc");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let defaults = CatalogConfig::default();
        let catalog_timeout_secs: u64 =
            env_or("CATALOG_TIMEOUT_SECS", &DEFAULT_TIMEOUT.as_secs().to_string())
                .parse()
                .expect("CATALOG_TIMEOUT_SECS must be a valid u64");
        let catalog = CatalogConfig {
            search_url: env_or("CATALOG_SEARCH_URL", DEFAULT_SEARCH_URL),
            timeout: Duration::from_secs(catalog_timeout_secs),
            user_agent: env_or("CATALOG_USER_AGENT", &defaults.user_agent),
        };

        let catalog_result_limit: usize =
            env_or("CATALOG_RESULT_LIMIT", &DEFAULT_RESULT_LIMIT.to_string())
                .parse()
                .expect("CATALOG_RESULT_LIMIT must be a valid usize");

        let secret =
            std::env::var("NONCE_SECRET").expect("NONCE_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "NONCE_SECRET must not be empty");

        let lifetime_secs: i64 =
            env_or("NONCE_LIFETIME_SECS", &DEFAULT_NONCE_LIFETIME_SECS.to_string())
                .parse()
                .expect("NONCE_LIFETIME_SECS must be a valid i64");
        assert!(lifetime_secs > 0, "NONCE_LIFETIME_SECS must be positive");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            catalog,
            catalog_result_limit,
            nonce: NonceConfig {
                secret,
                lifetime_secs,
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
