//! Apply the notes schema to `DATABASE_URL` without starting the server.

use notekeeper_storage::{PoolConfig, connect_pool, run_pg_migrations};

pub(crate) async fn run() -> anyhow::Result<()> {
    let url = crate::get_database_url()?;
    let pool = connect_pool(&url, PoolConfig::from_env()).await?;
    run_pg_migrations(&pool).await?;
    pool.close().await;
    println!("notes schema is up to date");
    Ok(())
}
