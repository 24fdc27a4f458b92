//! PostgreSQL pool setup for the document store.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use modelhub_core::config::DatabaseConfig;
use modelhub_core::error::{AppError, ErrorKind};
use modelhub_core::result::AppResult;

/// Pool sizing and timeouts from the `database` config section.
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
}

/// Open a pool to `config.url`.
pub async fn open_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    info!(
        url = %mask_password(&config.url),
        max_connections = config.max_connections,
        "Opening PostgreSQL pool"
    );

    pool_options(config)
        .connect(&config.url)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to connect to database", e))
}

/// Replace the password of a connection URL with `****`.
pub fn mask_password(url: &str) -> String {
    let (scheme, rest) = url.split_once("://").unwrap_or(("", url));
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    let Some((user, _)) = credentials.split_once(':') else {
        return url.to_string();
    };

    if scheme.is_empty() {
        format!("{user}:****@{host}")
    } else {
        format!("{scheme}://{user}:****@{host}")
    }
}
