use std::{net::SocketAddr, path::Path, sync::Arc, time::Duration};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::observability::MeteredSeedSource;
use crate::routes::{self, ServerState};
use service::{HttpSeedSource, StudentStore};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config from `CONFIG_PATH` (default `config.toml`); without a file,
/// fall back to environment variables. A present but invalid file is an error.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        warn!(%path, "config file not found; using environment");
        AppConfig::from_env()
    }
}

/// Wire the store to the remote seed source described by `cfg`.
pub fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let source = HttpSeedSource::from_url(&cfg.seed.url, Duration::from_secs(cfg.seed.timeout_secs))?;
    let store = StudentStore::new(Arc::new(MeteredSeedSource::new(source)));
    Ok(ServerState { store })
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Serve until Ctrl+C.
pub async fn run_with(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg)?;
    let app = build_app(state);

    let addr = bind_addr(&cfg)?;
    info!(%addr, seed_url = %cfg.seed.url, "starting students server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
