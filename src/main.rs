//! Shift ledger server binary.
//!
//! Loads configuration, seeds the in-memory store, and serves the API.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shift_ledger::api::{AppState, create_router};
use shift_ledger::config::ConfigLoader;
use shift_ledger::store::{MemoryStore, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("SHIFT_LEDGER_CONFIG").unwrap_or_else(|_| "./config/app".to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {config_dir}"))?;

    let store: Arc<dyn Store> = Arc::new(MemoryStore::default());
    for seed in config.seed_users() {
        let user = store.insert_user(&seed.email, &seed.name, &seed.password_hash);
        info!(user_id = user.id, email = %user.email, "Seeded user");
    }

    let state = AppState::new(store);
    let router = create_router(state);

    let addr = format!("{}:{}", config.server().host, config.server().port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "shift-ledger listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
