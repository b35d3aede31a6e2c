use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use super::PostgresConfig;
use crate::common::{DatabaseError, RetryConfig, retry_with_backoff};

/// Build the connection pool without contacting the server.
///
/// Connections are opened on first use, so this succeeds even while
/// PostgreSQL is down; the caller finds out through [`prepare`] or a query.
pub async fn connect_lazy(config: &PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.connect_options(true)).await?;
    info!("PostgreSQL connection pool created");
    Ok(db)
}

/// Apply every pending migration of `M`; `app_name` labels logs and errors.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DatabaseError> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("{}: {}", app_name, e)))?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

/// Verify connectivity and bring the schema up to date.
///
/// The ping is retried per `retry`; migration failures are not.
pub async fn prepare<M: MigratorTrait>(
    db: &DatabaseConnection,
    retry: RetryConfig,
    app_name: &str,
) -> Result<(), DatabaseError> {
    retry_with_backoff(|| db.ping(), retry)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Connected to PostgreSQL");
    run_migrations::<M>(db, app_name).await
}

/// Close the pool, logging the outcome. Used during graceful shutdown.
pub async fn close(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("PostgreSQL connection pool closed"),
        Err(e) => warn!("Failed to close PostgreSQL connection pool: {}", e),
    }
}
