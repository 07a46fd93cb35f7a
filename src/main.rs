use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::Config;
use mergington::database::ActivityDirectory;
use mergington::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    // 2. Config + directory
    let config = Config::from_env()?;
    let directory = Arc::new(
        ActivityDirectory::seeded().with_capacity_enforcement(config.enforce_capacity),
    );
    info!(
        build_id = env!("MERGINGTON_BUILD_ID"),
        activities = directory.len(),
        enforce_capacity = directory.enforces_capacity(),
        static_dir = %config.static_dir.display(),
        "activity directory seeded"
    );

    let app = web::router(directory, &config.static_dir);

    // 3. Bind, with one fallback port
    let addr = config.socket_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server listening on http://{}", bound_addr);
    info!("Open http://{}{} to sign up", bound_addr, web::INDEX_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
