//! Named counters with saturating increments.

use std::collections::BTreeMap;

use nexus_types::CounterKind;

/// Demo seed value for [`CounterKind::TotalCalls`].
const SEED_TOTAL_CALLS: u64 = 142;
/// Demo seed value for [`CounterKind::TokensSaved`].
const SEED_TOKENS_SAVED: u64 = 4500;
/// The fixed gauge value for [`CounterKind::ActiveAgents`].
const ACTIVE_AGENTS_GAUGE: u64 = 1;

/// Mapping from [`CounterKind`] to its current value.
///
/// Every kind is present from construction, so reads never miss.
/// `TotalCalls` and `TokensSaved` only ever grow; `ActiveAgents` is set at
/// construction and never touched again.
#[derive(Debug, Clone)]
pub struct CounterStore {
    counters: BTreeMap<CounterKind, u64>,
}

impl CounterStore {
    /// Create a store with zeroed counters and the agent gauge at its
    /// fixed value.
    pub fn new() -> Self {
        let mut counters: BTreeMap<CounterKind, u64> =
            CounterKind::ALL.iter().map(|&kind| (kind, 0)).collect();
        counters.insert(CounterKind::ActiveAgents, ACTIVE_AGENTS_GAUGE);
        Self { counters }
    }

    /// Create a store pre-seeded with the demo values shown on a fresh
    /// dashboard.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.increment(CounterKind::TotalCalls, SEED_TOTAL_CALLS);
        store.increment(CounterKind::TokensSaved, SEED_TOKENS_SAVED);
        store
    }

    /// Add `amount` to the named counter, saturating at `u64::MAX`.
    pub fn increment(&mut self, kind: CounterKind, amount: u64) {
        let entry = self.counters.entry(kind).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Current value of the named counter.
    pub fn value(&self, kind: CounterKind) -> u64 {
        self.counters.get(&kind).copied().unwrap_or(0)
    }

    /// An immutable copy of all counter values.
    pub fn snapshot(&self) -> BTreeMap<CounterKind, u64> {
        self.counters.clone()
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}
