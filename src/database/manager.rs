use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Owns the shared connection pool for the application database
pub struct DatabaseManager;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

impl DatabaseManager {
    /// Get the application pool, connecting lazily on first use.
    /// The pool is shared process-wide; clones are cheap handles.
    pub async fn pool() -> Result<PgPool, DatabaseError> {
        let pool = POOL
            .get_or_try_init(|| async {
                let url = std::env::var("DATABASE_URL")
                    .map_err(|_| DatabaseError::ConfigMissing("DATABASE_URL"))?;

                let db = &config::config().database;
                let pool = PgPoolOptions::new()
                    .max_connections(db.max_connections)
                    .acquire_timeout(Duration::from_secs(db.connection_timeout))
                    .connect(&url)
                    .await
                    .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

                info!("Created database pool ({} max connections)", db.max_connections);
                Ok(pool)
            })
            .await?;

        Ok(pool.clone())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check() -> Result<(), DatabaseError> {
        let pool = Self::pool().await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(())
    }
}
