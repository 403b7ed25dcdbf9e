//! Control-plane API server for the Nexus workflow orchestrator.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Workflow trigger endpoints** (`POST /batch-onboard`, `/book-lunch`,
//!   `/create-identity`, `/request-approval`, `/order-device`) that
//!   validate their input, make a domain decision, and mutate the shared
//!   orchestration state
//! - **Stats endpoint** (`GET /api/stats`) serving a consistent snapshot
//!   of the counters and the event log for polling clients
//! - **Dashboard page** (`GET /`) that polls the stats endpoint every
//!   1.5 seconds and renders the counters plus a newest-first log view
//!
//! # Architecture
//!
//! All handlers share one [`OrchestrationState`](nexus_core::OrchestrationState)
//! behind a `tokio::sync::RwLock`. A handler step that updates a counter
//! and the log as one logical unit runs inside a single write-guard
//! critical section, so the stats reader can never observe a torn
//! counter/log pair. The batch-onboard delay releases the guard before
//! suspending, so other handlers and readers keep making progress.

pub mod actions;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod server;
pub mod state;
pub mod stats;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerError};
pub use state::AppState;
