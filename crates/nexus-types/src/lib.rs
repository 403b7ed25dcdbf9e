//! Shared type definitions for the Nexus control plane.
//!
//! This crate is the single source of truth for the types used across the
//! Nexus workspace: the orchestration data model consumed by `nexus-core`
//! and the wire-format request/response types served by `nexus-server`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`counters`] -- The named counters tracked by the shared state
//! - [`events`] -- The event-log entry type and its wire projection
//! - [`actions`] -- Request/response types for the workflow trigger endpoints
//! - [`stats`] -- The polling snapshot served to the dashboard

pub mod actions;
pub mod counters;
pub mod events;
pub mod ids;
pub mod stats;

// Re-export all public types at crate root for convenience.
pub use actions::{
    BatchOnboardRequest, BatchOnboardResponse, BookLunchRequest, BookLunchResponse,
    CreateIdentityRequest, CreateIdentityResponse, OnboardResult, OrderDeviceRequest,
    OrderDeviceResponse, OrderId, RequestApprovalRequest, RequestApprovalResponse,
};
pub use counters::{CounterKind, ParseCounterError};
pub use events::{LogEntry, LogEvent};
pub use ids::EventId;
pub use stats::StatsSnapshot;
