//! pathGate gateway binary.
//!
//! - Config from `PATHGATE_CONFIG` (default `pathgate.yaml`)
//! - Ops endpoints: /healthz, /readyz, /metrics
//! - Gated document store under `gateway.mount`
//! - Graceful shutdown on Ctrl-C (readiness flips to draining first)

use tracing_subscriber::{fmt, EnvFilter};

use pathgate_core::error::{PathGateError, Result};
use pathgate_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "pathgate-gateway exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = config::config_path();
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, config = %path, "pathgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PathGateError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| PathGateError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal(state: AppState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    state.begin_drain();
    tracing::info!("shutdown signal received, draining");
}
