//! The process-wide orchestration state and its snapshot.
//!
//! Exactly one [`OrchestrationState`] exists per process, constructed by
//! the composition root and shared behind an `Arc<tokio::sync::RwLock<_>>`.
//! Handlers mutate it through [`record_event`](OrchestrationState::record_event)
//! and [`bump_counter`](OrchestrationState::bump_counter); the stats reader
//! observes it through [`snapshot_all`](OrchestrationState::snapshot_all).

use std::collections::BTreeMap;

use nexus_types::{CounterKind, LogEntry, LogEvent, StatsSnapshot};

use crate::counters::CounterStore;
use crate::log::EventLog;

/// The composition of the event log and the counter store.
///
/// No ambient global exists; tests construct isolated instances and the
/// server binary owns the single shared one.
#[derive(Debug, Clone, Default)]
pub struct OrchestrationState {
    log: EventLog,
    counters: CounterStore,
}

impl OrchestrationState {
    /// Create a fresh state: empty log, zeroed counters, agent gauge at 1.
    pub fn new() -> Self {
        Self {
            log: EventLog::new(),
            counters: CounterStore::new(),
        }
    }

    /// Create the demo state the server binary starts with: seeded
    /// counters plus the two boot log lines.
    pub fn seeded() -> Self {
        let mut state = Self {
            log: EventLog::new(),
            counters: CounterStore::seeded(),
        };
        state.record_event("System initialized. Listening for workflow events...");
        state.record_event("Connection established with mock identity provider.");
        state
    }

    /// Append a message to the event log.
    ///
    /// This is the sole way a handler publishes "something happened" to
    /// observers.
    pub fn record_event(&mut self, message: impl Into<String>) {
        self.log.append(message);
    }

    /// Add `amount` to the named counter.
    pub fn bump_counter(&mut self, kind: CounterKind, amount: u64) {
        self.counters.increment(kind, amount);
    }

    /// A consistent copy of both halves of the state.
    ///
    /// Callers must hold a single read-guard acquisition for the duration
    /// of this call; the returned snapshot then corresponds to one point
    /// in the serialized mutation history.
    pub fn snapshot_all(&self) -> StateSnapshot {
        StateSnapshot {
            counters: self.counters.snapshot(),
            events: self.log.snapshot(),
        }
    }

    /// Number of entries currently in the event log.
    pub fn event_count(&self) -> usize {
        self.log.len()
    }
}

/// Immutable, point-in-time copy of the orchestration state.
#[derive(Debug, Clone)]
pub struct StateSnapshot {
    /// Counter values at the snapshot instant.
    pub counters: BTreeMap<CounterKind, u64>,
    /// Event log at the snapshot instant, in insertion order.
    pub events: Vec<LogEvent>,
}

impl StateSnapshot {
    /// Value of the named counter at the snapshot instant.
    pub fn counter(&self, kind: CounterKind) -> u64 {
        self.counters.get(&kind).copied().unwrap_or(0)
    }

    /// Project this snapshot into the wire format the dashboard polls.
    pub fn to_stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_calls: self.counter(CounterKind::TotalCalls),
            tokens_saved: self.counter(CounterKind::TokensSaved),
            active_agents: self.counter(CounterKind::ActiveAgents),
            logs: self.events.iter().map(LogEntry::from).collect(),
        }
    }
}
