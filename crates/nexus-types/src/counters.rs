//! The named counters tracked by the shared orchestration state.
//!
//! Handler code addresses counters through [`CounterKind`], so an unknown
//! counter name is unrepresentable once a request has been parsed. The
//! name-based failure mode ([`ParseCounterError`]) is confined to the
//! [`FromStr`] boundary.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A counter maintained in the shared orchestration state.
///
/// `TotalCalls` and `TokensSaved` are monotonically non-decreasing;
/// `ActiveAgents` is a fixed gauge set at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterKind {
    /// Number of workflow trigger calls handled since startup.
    TotalCalls,
    /// Estimated prompt tokens saved by batching.
    TokensSaved,
    /// Number of agent workflows currently wired up.
    ActiveAgents,
}

impl CounterKind {
    /// All counter kinds, in display order.
    pub const ALL: [Self; 3] = [Self::TotalCalls, Self::TokensSaved, Self::ActiveAgents];

    /// The snake_case wire name of this counter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalCalls => "total_calls",
            Self::TokensSaved => "tokens_saved",
            Self::ActiveAgents => "active_agents",
        }
    }
}

impl core::fmt::Display for CounterKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a counter name does not match any known counter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown counter: {name}")]
pub struct ParseCounterError {
    /// The unrecognized name.
    pub name: String,
}

impl FromStr for CounterKind {
    type Err = ParseCounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total_calls" => Ok(Self::TotalCalls),
            "tokens_saved" => Ok(Self::TokensSaved),
            "active_agents" => Ok(Self::ActiveAgents),
            other => Err(ParseCounterError {
                name: other.to_owned(),
            }),
        }
    }
}
