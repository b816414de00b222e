use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

/// Resolve the bind address from the validated configuration.
fn load_bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    let addr = cfg.server.bind_addr();
    addr.parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address {addr}: {e}"))
}

/// Public entry: build the app with a fresh in-memory store and serve until the task ends.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = ServerState::in_memory();
    let app: Router = routes::build_router(state);

    let addr = load_bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(service = "server", event = "listening", %addr, "start server on port {}", addr.port());
    axum::serve(listener, app).await?;
    Ok(())
}
