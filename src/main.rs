mod api;
mod app_system;
mod cache_actor;
mod clients;
mod domain;
mod filter;
mod resolver;
mod supplier;

#[cfg(test)]
mod mock_framework;

use anyhow::Context;
use tracing::info;
use crate::app_system::{setup_tracing, AggregatorSystem, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env().context("loading configuration")?;
    info!(addr = %config.listen_addr, "Starting food aggregator");
    for (supplier, url) in &config.suppliers {
        info!(supplier = %supplier, url = %url, "Supplier configured");
    }

    let system = AggregatorSystem::new(&config).context("building supplier transport")?;
    let app = api::router(system.resolver.clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .context("serving http")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Food aggregator stopped");
    Ok(())
}
