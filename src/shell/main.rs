use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use event_registry::shared::infrastructure::record_store::RecordStore;
use event_registry::shared::infrastructure::record_store::file_system::FileRecordStore;
use event_registry::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use event_registry::shell::config::{AppConfig, StoreBackend};
use event_registry::shell::http::router;
use event_registry::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let store: Arc<dyn RecordStore> = match &config.store {
        StoreBackend::File { data_dir } => {
            tracing::info!(data_dir = %data_dir.display(), "using file record store");
            Arc::new(
                FileRecordStore::open(data_dir.clone())
                    .await
                    .with_context(|| format!("opening data dir {}", data_dir.display()))?,
            )
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory record store, nothing will survive a restart");
            Arc::new(InMemoryRecordStore::new())
        }
    };

    let state = AppState::load(store)
        .await
        .context("loading registry collections")?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("event registry listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
