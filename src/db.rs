use std::time::Duration;

use anyhow::{Context, Result};
use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::AppConfig;

pub type DbPool = PgPool;
pub type OrmConn = DatabaseConnection;

/// Connect to Postgres and verify the connection before returning.
///
/// Startup must not continue with an unusable handle, so a failed connect or
/// ping is returned as an error instead of being logged and ignored.
pub async fn create_pool(config: &AppConfig) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect(&config.database_url)
        .await
        .context("failed to connect to the favorites database")?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("favorites database did not answer a ping")?;

    Ok(pool)
}

/// Share the sqlx pool with sea-orm.
pub fn orm_from_pool(pool: &DbPool) -> OrmConn {
    SqlxPostgresConnector::from_sqlx_postgres_pool(pool.clone())
}

pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to apply migrations")?;
    Ok(())
}
