use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::{self, DbService};
use crate::utils::AppError;

/// Shared application state
///
/// Holds shared references to every service. `Clone` is shallow: the pool
/// and the JWT service are reference-counted internally.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Immutable configuration |
/// | pool | SqlitePool | SQLite connection pool |
/// | jwt_service | Arc<JwtService> | JWT token service |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Initialize all services: open the database, run migrations and
    /// seed the first superuser if the operator table is empty
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        // Make sure the database directory exists
        if let Some(parent) = std::path::Path::new(&config.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::internal(format!("Failed to create data dir: {e}")))?;
        }

        let db = DbService::new(&config.database_path).await?;
        let state = Self {
            config: config.clone(),
            pool: db.pool,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
        };

        db::seed::seed_superuser(&state.pool, config).await?;

        Ok(state)
    }

    /// Build state over an in-memory database, used by tests
    pub async fn in_memory(config: Config) -> Result<Self, AppError> {
        let db = DbService::in_memory().await?;
        Ok(Self {
            pool: db.pool,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
            config,
        })
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
