//! gatewarden - filtering TCP gateway with an administrative blacklist console.
//!
//! Inbound connections are checked against a shared IP blacklist before any
//! other work; accepted ones are relayed to the configured upstream. A
//! local console mutates the blacklist at runtime.

mod command;
mod config;
mod network;
mod security;
mod state;
mod stats;

use crate::command::Registry;
use crate::config::Config;
use crate::network::{Console, Gateway};
use crate::state::GateState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        listen = %config.listen.address,
        upstream = %config.upstream.address,
        console = %config.console.address,
        "Starting gatewarden"
    );

    let state = Arc::new(GateState::new(
        config.messages.clone(),
        PathBuf::from(&config_path),
    ));
    let registry = Arc::new(Registry::new());

    // Bind the gateway before the console: anything that can reach the
    // console finds the public listener already up.
    let gateway = Gateway::bind(
        config.listen.address,
        config.upstream.address,
        Arc::clone(&state),
    )
    .await?;

    let console = Console::bind(config.console.address, state, registry).await?;
    tokio::spawn(async move {
        if let Err(e) = console.run().await {
            error!(error = %e, "Console listener failed");
        }
    });

    // Run the gateway on the main task
    gateway.run().await
}
