//! Bounded, append-only event log.
//!
//! The log keeps the most recent [`LOG_CAPACITY`] entries in insertion
//! order. Appends never fail; once the cap is reached the oldest entries
//! are evicted from the head.

use nexus_types::LogEvent;

/// Maximum number of entries the log retains.
///
/// A capacity breach is prevented by construction: [`EventLog::append`]
/// evicts from the head before returning, so `len() <= LOG_CAPACITY` holds
/// after every operation.
pub const LOG_CAPACITY: usize = 50;

/// Ordered, bounded sequence of [`LogEvent`] entries.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<LogEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append a message stamped with the current wall-clock time.
    ///
    /// Evicts from the head until the log is back at capacity. Visible to
    /// every subsequent [`snapshot`](Self::snapshot).
    pub fn append(&mut self, message: impl Into<String>) {
        self.events.push(LogEvent::new(message));
        if self.events.len() > LOG_CAPACITY {
            let drain_count = self.events.len().saturating_sub(LOG_CAPACITY);
            self.events.drain(..drain_count);
        }
    }

    /// A copy of all current entries in insertion order.
    ///
    /// Returns an owned copy rather than a reference so readers can never
    /// observe later mutations of the internal buffer.
    pub fn snapshot(&self) -> Vec<LogEvent> {
        self.events.clone()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
