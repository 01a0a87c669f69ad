use fleet_core::AppError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::administrators::AdministratorRepository;
use crate::config::DatabaseConfig;
use crate::vehicles::VehicleRepository;

/// Central database facade — owns the connection pool, runs migrations,
/// and vends repository instances.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {e}")))?;

        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run all pending migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        tracing::info!("Running database migrations");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {e}")))?;
        Ok(())
    }

    /// Get an [`AdministratorRepository`] backed by this pool.
    pub fn administrator_repo(&self) -> AdministratorRepository {
        AdministratorRepository::new(self.pool.clone())
    }

    /// Get a [`VehicleRepository`] backed by this pool.
    pub fn vehicle_repo(&self) -> VehicleRepository {
        VehicleRepository::new(self.pool.clone())
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
