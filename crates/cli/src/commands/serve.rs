use anyhow::Result;
use notekeeper_core::{
    ENV_SAY_TIMEOUT_SECS, ENV_SAY_URL, SAY_REQUEST_TIMEOUT_SECS, env_non_empty,
    env_parse_with_default,
};
use notekeeper_http::{AppState, create_router};
use notekeeper_service::{KeywordProxy, NoteService};
use notekeeper_storage::{PoolConfig, StorageBackend};
use std::sync::Arc;
use std::time::Duration;

use crate::get_database_url;

pub(crate) async fn run(port: u16, host: String, ephemeral: bool) -> Result<()> {
    let storage = if ephemeral {
        tracing::warn!("--ephemeral: notes are kept in memory and lost on exit");
        StorageBackend::new_memory()
    } else {
        StorageBackend::new_postgres(&get_database_url()?, PoolConfig::from_env()).await?
    };
    tracing::info!(backend = storage.name(), "Storage ready");

    let note_service = Arc::new(NoteService::new(Arc::new(storage)));
    let keyword_proxy = build_keyword_proxy()?;

    let state = Arc::new(AppState { note_service, keyword_proxy });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

fn build_keyword_proxy() -> Result<Option<Arc<KeywordProxy>>> {
    let Some(url) = env_non_empty(ENV_SAY_URL) else {
        tracing::info!("{ENV_SAY_URL} not set, /say is disabled");
        return Ok(None);
    };
    let timeout = Duration::from_secs(env_parse_with_default(
        ENV_SAY_TIMEOUT_SECS,
        SAY_REQUEST_TIMEOUT_SECS,
    ));
    let proxy = KeywordProxy::new(url, timeout)?;
    tracing::info!(url = proxy.url(), "Keyword proxy enabled");
    Ok(Some(Arc::new(proxy)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
