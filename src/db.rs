//! Connection pool and schema bootstrap.

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::Config;

/// Builds the pool the stores share, sized and timed out per `config`.
pub async fn create_pool_from_config(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(1)
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS account (
            account_id SERIAL PRIMARY KEY,
            username VARCHAR(255) NOT NULL,
            password VARCHAR(255) NOT NULL,
            UNIQUE (username, password)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS message (
            message_id SERIAL PRIMARY KEY,
            posted_by INTEGER NOT NULL REFERENCES account (account_id),
            message_text VARCHAR(255) NOT NULL,
            time_posted_epoch BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("database migrations complete");
    Ok(())
}

/// Pool for the database-backed tests, configured like the server and with
/// the schema in place.
#[cfg(test)]
pub(crate) async fn test_pool() -> PgPool {
    let config = Config::from_env().expect("invalid configuration");
    let pool = create_pool_from_config(&config)
        .await
        .expect("pool creation failed");
    run_migrations(&pool).await.expect("migrations failed");
    pool
}
