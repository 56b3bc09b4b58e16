//! PostgreSQL storage backend using sqlx.

mod notes;

use std::time::Duration;

use crate::error::StorageError;
use notekeeper_core::{
    ENV_PG_ACQUIRE_TIMEOUT_SECS, ENV_PG_IDLE_TIMEOUT_SECS, ENV_PG_MAX_CONNECTIONS, Note,
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    env_parse_with_default,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use super::pg_migrations::run_pg_migrations;

/// Connection pool sizing and timeouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing.
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: PG_POOL_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS),
        }
    }
}

impl PoolConfig {
    /// Read overrides from `NOTEKEEPER_PG_*`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_connections: env_parse_with_default(
                ENV_PG_MAX_CONNECTIONS,
                PG_POOL_MAX_CONNECTIONS,
            )
            .max(1),
            acquire_timeout: Duration::from_secs(env_parse_with_default(
                ENV_PG_ACQUIRE_TIMEOUT_SECS,
                PG_POOL_ACQUIRE_TIMEOUT_SECS,
            )),
            idle_timeout: Duration::from_secs(env_parse_with_default(
                ENV_PG_IDLE_TIMEOUT_SECS,
                PG_POOL_IDLE_TIMEOUT_SECS,
            )),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, then bring the schema up to date.
    pub async fn new(database_url: &str, config: PoolConfig) -> Result<Self, StorageError> {
        let pool = connect_pool(database_url, config).await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!(
            max_connections = config.max_connections,
            acquire_timeout = ?config.acquire_timeout,
            "PgStorage initialized"
        );
        Ok(Self { pool })
    }

    /// Wrap an existing pool without running migrations.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the bounded pool. Acquisition past `acquire_timeout` fails with
/// `PoolTimedOut` instead of waiting forever.
pub async fn connect_pool(database_url: &str, config: PoolConfig) -> Result<PgPool, StorageError> {
    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .test_before_acquire(true)
        .connect(database_url)
        .await?)
}

pub(crate) fn row_to_note(row: &sqlx::postgres::PgRow) -> Result<Note, StorageError> {
    Ok(Note::new(row.try_get("id")?, row.try_get("title")?, row.try_get("content")?))
}

pub(crate) const NOTE_COLUMNS: &str = "id, title, content";
