use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging;
use configs::AppConfig;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::{bootstrap, runtime};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve the instance directory and database URL, open and migrate the
/// database, and seed the catalog on first run.
pub async fn prepare_state(cfg: &mut AppConfig) -> anyhow::Result<ServerState> {
    let instance_dir = runtime::ensure_instance_dir(&cfg.storage.instance_path, &cfg.storage.fallback_path).await?;
    cfg.database.resolve_url(&instance_dir.join(&cfg.storage.db_file));
    cfg.database
        .validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let db = models::db::connect_and_migrate(&cfg.database).await?;
    let seeded = bootstrap::seed_if_empty(&db).await?;
    info!(seeded, "database bootstrap complete");
    Ok(ServerState::new(db))
}

/// Everything `run` serves, without binding a socket.
pub async fn build_app(cfg: &mut AppConfig) -> anyhow::Result<(Router, SocketAddr)> {
    let state = prepare_state(cfg).await?;
    let app = routes::build_router(state, build_cors());
    let addr = cfg.server.bind_addr()?;
    Ok((app, addr))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: load config, build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let mut cfg = AppConfig::load().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    init_logging(&cfg.logging.format);

    let (app, addr) = build_app(&mut cfg).await?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "shop server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shop server stopped");
    Ok(())
}
