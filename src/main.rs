mod api;
mod app_system;
mod clients;
mod config;
mod domain;
mod error;
mod messages;
mod service;
mod store;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tracing::{error, info, warn};
use crate::app_system::{setup_tracing, RegistrySystem};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    let listener = config.bind().await?;
    let addr = listener.local_addr().map_err(|e| e.to_string())?;

    let system = RegistrySystem::new(&config);
    let app = api::create_router(system.app_state());

    info!(%addr, "User registry listening");
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Err(e) = &served {
        error!(error = %e, "Server failed");
    }

    // The router and its state are gone once serve returns
    system.shutdown().await?;

    served.map_err(|e| e.to_string())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C, shutting down"),
    }
}
