//! Control-plane server binary.
//!
//! Wires together configuration, the shared orchestration state, and the
//! HTTP server.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `nexus-config.yaml` (defaults if absent)
//! 3. Construct the seeded orchestration state
//! 4. Serve the API and dashboard until terminated

use std::path::Path;
use std::sync::Arc;

use nexus_core::{ConfigError, NexusConfig};
use nexus_server::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point for the control-plane server.
///
/// # Errors
///
/// Returns an error if configuration loading or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("nexus-server starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        batch_latency_ms = config.workflow.batch_latency_ms,
        "Configuration loaded"
    );

    // 3. Construct the shared orchestration state.
    let state = Arc::new(AppState::from_config(&config));
    info!("Orchestration state seeded");

    // 4. Serve until terminated.
    nexus_server::start_server(&config.server, state).await?;

    Ok(())
}

/// Load the server configuration from `nexus-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<NexusConfig, ConfigError> {
    let config_path = Path::new("nexus-config.yaml");
    if config_path.exists() {
        NexusConfig::from_file(config_path)
    } else {
        info!("Config file not found, using defaults");
        Ok(NexusConfig::default())
    }
}
