//! Database connection pool management.

use async_trait::async_trait;
use nimbus_config::DatabaseConfig;
use nimbus_core::{Interface, NimbusError, NimbusResult};
use shaku::Component;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};

/// Interface for database pool operations.
///
/// This trait abstracts database pool functionality for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns the underlying MySQL pool, or a `Database` error when the
    /// pool was never initialized.
    fn acquire(&self) -> NimbusResult<&MySqlPool>;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> NimbusResult<()>;

    /// Runs database migrations.
    async fn run_migrations(&self) -> NimbusResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    /// Connection pool. `None` only for a placeholder built without
    /// configuration; every accessor surfaces that as a `Database` error.
    #[shaku(default = None)]
    pool: Option<MySqlPool>,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    pub async fn new(config: &DatabaseConfig) -> NimbusResult<Self> {
        info!("Connecting to MySQL database...");

        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                NimbusError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("MySQL connection pool established");
        Ok(Self { pool: Some(pool) })
    }

    /// Creates a `DatabasePool` from a pre-existing pool (for DI wiring).
    #[must_use]
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Returns the underlying pool.
    pub fn inner(&self) -> NimbusResult<&MySqlPool> {
        self.pool
            .as_ref()
            .ok_or_else(|| NimbusError::Database("Database pool is not initialized".to_string()))
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn acquire(&self) -> NimbusResult<&MySqlPool> {
        self.inner()
    }

    async fn health_check(&self) -> NimbusResult<()> {
        sqlx::query("SELECT 1")
            .execute(self.inner()?)
            .await
            .map_err(|e| NimbusError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    async fn run_migrations(&self) -> NimbusResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(self.inner()?)
            .await
            .map_err(|e| NimbusError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn close(&self) {
        if let Some(pool) = &self.pool {
            info!("Closing database connection pool...");
            pool.close().await;
            info!("Database connection pool closed");
        }
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("connected", &self.pool.is_some())
            .finish()
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> NimbusResult<std::sync::Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(std::sync::Arc::new(pool))
}
