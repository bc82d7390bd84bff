use anyhow::Context;
use flatfs_server::{AppState, GatewayConfig, app};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    info!("starting flatfs server");
    let config = GatewayConfig::load().context("failed to load gateway config")?;
    let addr = config.socket_addr()?;

    info!(
        root = %config.root,
        policy = ?config.path_policy,
        serialize_writes = config.serialize_writes,
        "serving directory"
    );
    if !std::path::Path::new(&config.root).is_dir() {
        warn!(root = %config.root, "root directory does not exist or is not a directory");
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "server listening, press Ctrl+C to shut down");

    axum::serve(listener, app(AppState::from_config(&config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, stopping server");
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
