//! `bookreviews-schema` -- install or remove the review storage schema.
//!
//! ```text
//! bookreviews-schema install      apply pending migrations
//! bookreviews-schema uninstall    drop the reviews table and migration history
//! ```
//!
//! # Environment variables
//!
//! | Variable       | Required | Default                            |
//! |----------------|----------|------------------------------------|
//! | `DATABASE_URL` | no       | `sqlite://bookreviews.db?mode=rwc` |

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DATABASE_URL: &str = "sqlite://bookreviews.db?mode=rwc";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookreviews_db=info,bookreviews_schema=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let command = std::env::args().nth(1).unwrap_or_default();
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = bookreviews_db::create_pool(&database_url)
        .await
        .with_context(|| format!("connecting to {database_url}"))?;

    match command.as_str() {
        "install" => {
            bookreviews_db::run_migrations(&pool)
                .await
                .context("applying migrations")?;
            tracing::info!("Review schema installed");
        }
        "uninstall" => {
            bookreviews_db::uninstall(&pool)
                .await
                .context("dropping review schema")?;
            tracing::info!("Review schema removed");
        }
        other => bail!("unknown command {other:?}; expected `install` or `uninstall`"),
    }

    pool.close().await;
    Ok(())
}
