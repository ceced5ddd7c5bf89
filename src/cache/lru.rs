//! Recency ordering for cache eviction.
//!
//! Each touch stamps the id with a fresh, strictly increasing tick. The
//! smallest live tick is the least recently used id, so ids touched in
//! insertion order and never again are evicted in that same order.

use std::collections::{BTreeMap, HashMap};

use crate::models::EmployeeId;

/// Recency index over cached ids.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Next tick to hand out
    clock: u64,
    /// Id -> tick of its latest touch
    ticks: HashMap<EmployeeId, u64>,
    /// Tick -> id, ascending from least to most recently used
    order: BTreeMap<u64, EmployeeId>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as the most recently used, tracking it if it is new.
    pub fn touch(&mut self, id: EmployeeId) {
        let tick = self.clock;
        self.clock += 1;
        if let Some(previous) = self.ticks.insert(id, tick) {
            self.order.remove(&previous);
        }
        self.order.insert(tick, id);
    }

    /// Stops tracking `id`; no-op if it is not tracked.
    pub fn remove(&mut self, id: EmployeeId) {
        if let Some(tick) = self.ticks.remove(&id) {
            self.order.remove(&tick);
        }
    }

    /// Removes and returns the least recently used id.
    pub fn evict_oldest(&mut self) -> Option<EmployeeId> {
        let (_, id) = self.order.pop_first()?;
        self.ticks.remove(&id);
        Some(id)
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}
