//! Database - Creazione del pool di connessioni MySQL e migrazioni

use crate::core::config::Config;
use crate::core::error::ServerError;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::time::Duration;
use tracing::{info, instrument};

/// Apre il pool verso `DATABASE_URL` e applica le migrazioni in `migrations/`.
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn init_pool(config: &Config) -> Result<MySqlPool, ServerError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await?;
    info!("Database connection pool established");

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied");

    Ok(pool)
}
