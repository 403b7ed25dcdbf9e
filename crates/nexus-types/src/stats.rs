//! The polling snapshot served to the dashboard.

use serde::{Deserialize, Serialize};

use crate::events::LogEntry;

/// Wire-format snapshot returned by `GET /api/stats`.
///
/// A lightweight projection of the orchestration state that the dashboard
/// polls every 1.5 seconds. Produced from a single consistent read of the
/// shared state, so the counter values and the log always belong to the
/// same point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Number of workflow trigger calls handled since startup.
    pub total_calls: u64,
    /// Estimated prompt tokens saved by batching.
    pub tokens_saved: u64,
    /// Number of agent workflows currently wired up.
    pub active_agents: u64,
    /// The event log in insertion order, capped at 50 entries.
    pub logs: Vec<LogEntry>,
}
