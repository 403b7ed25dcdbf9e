//! The event-log entry type and its wire projection.
//!
//! [`LogEvent`] is what the orchestration state stores; [`LogEntry`] is the
//! `{time, msg}` shape the dashboard polls for, with the timestamp reduced
//! to `HH:MM:SS`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::EventId;

/// A single timestamped entry in the orchestration event log.
///
/// Immutable once created. Insertion order in the log is chronological
/// order because all appends are serialized through the state lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Unique event identifier.
    pub id: EventId,
    /// Human-readable status message shown on the dashboard.
    pub message: String,
    /// Real-world timestamp when the event was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl LogEvent {
    /// Create a new event stamped with the current wall-clock time.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            message: message.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Wire projection of a [`LogEvent`] for the polling dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Wall-clock time of the event, formatted `HH:MM:SS`.
    pub time: String,
    /// The event message.
    pub msg: String,
}

impl From<&LogEvent> for LogEntry {
    fn from(event: &LogEvent) -> Self {
        Self {
            time: event.recorded_at.format("%H:%M:%S").to_string(),
            msg: event.message.clone(),
        }
    }
}
