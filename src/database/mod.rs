//! Database connection setup
//!
//! Connections are plain sea-orm pools. Migrations from the
//! `user-auth-api-migration` crate run right after connecting.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use user_auth_api_migration::{Migrator, MigratorTrait};

use crate::config::DatabaseConfig;

/// Connect using the configured URL and bring the schema up to date
#[tracing::instrument(skip(config))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready");

    Ok(db)
}

/// Private in-memory SQLite database with all migrations applied
///
/// Every call yields a separate database. The pool is pinned to a single
/// connection because each SQLite memory connection is its own database.
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
