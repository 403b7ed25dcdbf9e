//! Shared application state for the control-plane server.
//!
//! [`AppState`] holds the single process-wide [`OrchestrationState`]
//! behind a read-write lock, plus the workflow settings handlers need.
//! There is no per-request copy and no ambient global: the composition
//! root constructs one instance and injects it via Axum's `State`
//! extractor, so tests can run isolated instances side by side.

use std::sync::Arc;
use std::time::Duration;

use nexus_core::{NexusConfig, OrchestrationState};
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The lock
/// serializes every mutation and every snapshot; handlers keep each
/// logical mutation unit inside one write-guard acquisition.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The process-wide counters + event log.
    pub orchestration: Arc<RwLock<OrchestrationState>>,
    /// Artificial delay between the two batch-onboard log phases.
    pub batch_latency: Duration,
}

impl AppState {
    /// Create state with a fresh (zeroed) orchestration store.
    pub fn new(batch_latency: Duration) -> Self {
        Self {
            orchestration: Arc::new(RwLock::new(OrchestrationState::new())),
            batch_latency,
        }
    }

    /// Create state with the demo seed the server binary starts from.
    pub fn seeded(batch_latency: Duration) -> Self {
        Self {
            orchestration: Arc::new(RwLock::new(OrchestrationState::seeded())),
            batch_latency,
        }
    }

    /// Build the seeded state from loaded configuration.
    pub fn from_config(config: &NexusConfig) -> Self {
        Self::seeded(Duration::from_millis(config.workflow.batch_latency_ms))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
