//! Server state
//!
//! [`ServerState`] holds the shared handles every handler needs. It is
//! constructed once at startup and injected through axum's `State`
//! extractor — there is no ambient database singleton anywhere.

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared server state. Cloning is cheap: the pool is internally
/// reference-counted.
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Database service (SQLite pool)
    pub db: DbService,
}

impl ServerState {
    /// Manual construction, mostly for tests that already have a
    /// [`DbService`].
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Open the database, apply migrations and assemble the state.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            db,
        })
    }

    /// Connection pool shorthand for repository calls
    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// Close the database pool. Idempotent; in-flight queries finish first.
    pub async fn shutdown(&self) {
        self.db.close().await;
    }
}
