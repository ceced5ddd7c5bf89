//! Cache effectiveness counters.

use serde::Serialize;

/// Counters accumulated by [`EmployeeCache`](crate::cache::EmployeeCache).
///
/// `total_entries` is filled in when a snapshot is taken; the cache itself
/// only bumps the event counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that fell through to the store (absent or expired)
    pub misses: u64,
    /// Entries dropped to respect the capacity bound
    pub evictions: u64,
    /// Entries dropped after sitting idle past the ttl
    pub expirations: u64,
    /// Entries held when the snapshot was taken
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of lookups answered by the cache; 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    /// Copies the counters, stamped with the current entry count.
    pub fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            total_entries,
            ..self.clone()
        }
    }
}
