use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL, creating the database file
/// if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Limited to one connection that is never recycled, because every new
/// SQLite in-memory connection opens a fresh, empty database.
pub async fn create_in_memory_pool() -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Check that the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations, provisioning the `book_reviews` table.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Drop the `book_reviews` table and the migration ledger.
///
/// All stored reviews are lost. A later [`run_migrations`] provisions an
/// empty table again.
pub async fn uninstall(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS book_reviews")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(pool)
        .await?;
    tracing::info!("Dropped book_reviews table and migration history");
    Ok(())
}
