//! Shared orchestration state model for the Nexus control plane.
//!
//! This crate owns the process-wide mutable state the trigger handlers
//! write and the polling dashboard reads:
//!
//! - [`EventLog`] -- bounded, append-only log of status messages
//! - [`CounterStore`] -- named counters with saturating increments
//! - [`OrchestrationState`] -- the composition of both, with a consistent
//!   snapshot operation
//! - [`config`] -- YAML configuration loading for the server binary
//!
//! # Concurrency contract
//!
//! The state itself is a plain value; callers share it behind a single
//! `tokio::sync::RwLock`. Every mutation that belongs to one logical unit
//! (a counter bump plus its companion log line) must be performed under
//! one write-guard acquisition, and every snapshot under one read-guard
//! acquisition. That discipline is what makes [`StateSnapshot`] a
//! point-in-time view with no torn counter/log pairs.
//!
//! [`EventLog`]: log::EventLog
//! [`CounterStore`]: counters::CounterStore
//! [`OrchestrationState`]: state::OrchestrationState
//! [`StateSnapshot`]: state::StateSnapshot

pub mod config;
pub mod counters;
pub mod log;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ConfigError, NexusConfig, ServerSettings, WorkflowSettings};
pub use counters::CounterStore;
pub use log::{EventLog, LOG_CAPACITY};
pub use state::{OrchestrationState, StateSnapshot};
