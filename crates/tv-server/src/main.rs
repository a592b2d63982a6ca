//! Development launcher for the vendor catalog API.
//!
//! Binds a fixed host/port (overridable via TV_SERVER_* environment
//! variables) and serves until killed. Auto-reload on source changes is
//! left to external tooling (e.g. cargo-watch).

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tv_dataset::VendorStore;
use tv_server::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tv_server=info,tv_dataset=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ServerConfig::default();
    if let Ok(host) = std::env::var("TV_SERVER_HOST") {
        config.host = host;
    }
    if let Ok(port) = std::env::var("TV_SERVER_PORT") {
        config.port = port.parse()?;
    }
    if let Ok(path) = std::env::var("TV_SERVER_DATA") {
        config.dataset_path = path.into();
    }
    if let Ok(origins) = std::env::var("TV_SERVER_ORIGINS") {
        config.allowed_origins = origins
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
    }

    info!("Vendors dataset: {}", config.dataset_path.display());

    let store = Arc::new(VendorStore::new(config.dataset_path.clone()));
    let (_state, handle, _port) = start_server(config, store).await?;

    handle.await?;
    Ok(())
}
