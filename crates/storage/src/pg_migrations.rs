//! PostgreSQL schema migrations for notekeeper storage.

use anyhow::Result;
use sqlx::PgPool;

/// Run all PostgreSQL migrations. Idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            id BIGSERIAL PRIMARY KEY,
            title TEXT,
            content TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_notes_title ON notes (title)")
        .execute(pool)
        .await?;

    tracing::debug!("notes schema is up to date");
    Ok(())
}
