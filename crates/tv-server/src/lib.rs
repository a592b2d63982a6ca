//! Vendor catalog HTTP server
//!
//! Exposes the read-only vendor catalog over HTTP using axum:
//! - GET /health       - liveness probe
//! - GET /api/vendors  - the full validated vendor list

pub mod error;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info, warn};

use tv_dataset::VendorStore;

use self::state::AppState;

/// Web server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    /// Origins allowed to call the API from a browser context. Fixed at
    /// startup; not exposed via any endpoint.
    pub allowed_origins: Vec<String>,
    /// Location of the static vendors artifact.
    pub dataset_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
                "https://pruebafutcon.onrender.com".to_string(),
            ],
            dataset_path: PathBuf::from("data/vendors.json"),
        }
    }
}

/// Start the web server.
///
/// Binds to the configured host/port (port 0 picks an ephemeral port) and
/// serves requests until the process exits. Returns the shared state, the
/// serve task handle, and the actual bound port.
pub async fn start_server(
    config: ServerConfig,
    store: Arc<VendorStore>,
) -> anyhow::Result<(AppState, tokio::task::JoinHandle<()>, u16)> {
    info!("Starting web server on {}:{}", config.host, config.port);

    let state = AppState::new(store);
    let app = build_app(state.clone(), &config);

    let host_ip = config.host.parse::<std::net::IpAddr>()?;
    let listener = TcpListener::bind(SocketAddr::from((host_ip, config.port))).await?;
    let port = listener.local_addr()?.port();

    info!("Web server listening on http://{}:{}", config.host, port);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok((state, handle, port))
}

/// Build the axum app with all routes and middleware
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(routes::health))
        .route("/api/vendors", get(routes::list_vendors))
        .with_state(state);

    if config.enable_cors {
        router = router.layer(cors_layer(&config.allowed_origins));
    }

    router
}

/// Static allow-list CORS policy: only the configured origins may call the
/// API from a browser, but all methods and headers are permitted for them.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring malformed CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
