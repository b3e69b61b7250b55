use sqlx::migrate::Migrator;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};
use thiserror::Error;
use tracing::{debug, info};

/// Migrations are embedded at build time from `migrations/`.
static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.missing_url")]
    MissingUrl,
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migration_error")]
    MigrationError(#[source] sqlx::migrate::MigrateError),
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Reads `DATABASE_URL` (and optionally `DATABASE_MAX_CONNECTIONS`),
    /// loading a `.env` file first when one is present.
    pub fn from_env() -> Result<Self, DatabaseError> {
        dotenvy::dotenv().ok();

        let url = env::var("DATABASE_URL").map_err(|_| DatabaseError::MissingUrl)?;
        let mut config = Self::new(url);

        if let Some(max) = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
        {
            config.max_connections = max;
        }

        Ok(config)
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::ConnectionError)?;

    debug!(
        max_connections = config.max_connections,
        "database pool created"
    );
    Ok(pool)
}

/// Applies the embedded migrations. Already applied ones are skipped.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(DatabaseError::MigrationError)
}

/// Connects and brings the schema up to date.
pub async fn init_database(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = create_postgres_pool(config).await?;
    run_migrations(&pool).await?;
    info!("database initialized");
    Ok(pool)
}

/// Waits for checked-out connections to return, then closes the pool.
pub async fn close_database(pool: &PgPool) {
    pool.close().await;
    info!("database closed");
}
