//! Employee Cache Module
//!
//! Bounded id -> employee map combining HashMap storage with LRU tracking and
//! sliding (time-since-last-access) expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::models::{Employee, EmployeeId};

// == Employee Cache ==
/// Bounded, expiring cache of employee records keyed by id.
///
/// All operations are total. The struct itself is not synchronized; callers
/// share it behind a lock and hold that lock for a single call only.
#[derive(Debug)]
pub struct EmployeeCache {
    /// Id -> entry storage
    entries: HashMap<EmployeeId, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Effectiveness counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Idle time after which an entry is treated as absent
    ttl: Duration,
}

impl EmployeeCache {
    // == Constructor ==
    /// Creates a new cache with the given capacity and idle ttl.
    ///
    /// A capacity of zero is clamped to one so that a put always leaves the
    /// written value visible.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl,
        }
    }

    // == Get ==
    /// Looks up an id, refreshing its access time on a hit.
    ///
    /// An entry idle for longer than the ttl is removed and reported absent.
    pub fn get(&mut self, id: EmployeeId) -> Option<Employee> {
        let expired = match self.entries.get(&id) {
            Some(entry) => entry.is_expired(self.ttl),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(&id);
            self.lru.remove(id);
            self.stats.record_miss();
            self.stats.record_expirations(1);
            debug!(id, "cache entry expired");
            return None;
        }

        let entry = self.entries.get_mut(&id)?;
        entry.touch();
        let value = entry.value.clone();
        self.lru.touch(id);
        self.stats.record_hit();
        Some(value)
    }

    // == Put ==
    /// Inserts or overwrites the entry for `id`.
    ///
    /// If the insert pushes the cache past capacity, the least recently
    /// accessed entry is evicted. The entry just written is the most recently
    /// used one, so it is never the victim.
    pub fn put(&mut self, id: EmployeeId, value: Employee) {
        self.entries.insert(id, CacheEntry::new(value));
        self.lru.touch(id);

        while self.entries.len() > self.max_entries {
            match self.lru.evict_oldest() {
                Some(victim) => {
                    self.entries.remove(&victim);
                    self.stats.record_eviction();
                    debug!(id = victim, "evicted least recently used cache entry");
                }
                None => break,
            }
        }

        debug_assert_eq!(self.lru.len(), self.entries.len());
    }

    // == Invalidate ==
    /// Removes the entry for `id` if present; no-op otherwise.
    pub fn invalidate(&mut self, id: EmployeeId) {
        if self.entries.remove(&id).is_some() {
            self.lru.remove(id);
        }
    }

    // == Contains ==
    /// Reports whether a live entry exists for `id` without touching it.
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.entries
            .get(&id)
            .is_some_and(|entry| !entry.is_expired(self.ttl))
    }

    // == Cleanup Expired ==
    /// Removes every entry idle for longer than the ttl.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let expired: Vec<EmployeeId> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(ttl))
            .map(|(id, _)| *id)
            .collect();

        for id in &expired {
            self.entries.remove(id);
            self.lru.remove(*id);
        }

        self.stats.record_expirations(expired.len());
        expired.len()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
