//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with sliding expiration.

use std::time::{Duration, Instant};

use crate::models::Employee;

// == Cache Entry ==
/// A cached employee record with access-time metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached record
    pub value: Employee,
    /// When the entry was inserted or last overwritten
    pub inserted_at: Instant,
    /// When the entry was last read or written
    pub last_accessed: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry, accessed now.
    pub fn new(value: Employee) -> Self {
        let now = Instant::now();
        Self {
            value,
            inserted_at: now,
            last_accessed: now,
        }
    }

    // == Touch ==
    /// Refreshes the last access time (sliding expiration).
    pub fn touch(&mut self) {
        self.last_accessed = Instant::now();
    }

    // == Is Expired ==
    /// Checks if the entry has gone unused for longer than `ttl`.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.is_expired_at(Instant::now(), ttl)
    }

    /// Expiry check against an explicit clock reading.
    ///
    /// An entry idle for exactly `ttl` is still live; it expires once the
    /// idle time strictly exceeds `ttl`.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_accessed) > ttl
    }
}
