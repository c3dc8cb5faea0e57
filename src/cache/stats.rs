//! Cache Statistics Module
//!
//! Tracks store activity: hits, misses, writes and observed expirations.

use serde::Serialize;

// == Store Stats ==
/// Tracks store activity counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    /// Number of successful retrievals
    pub hits: u64,
    /// Number of failed retrievals (key absent or expired)
    pub misses: u64,
    /// Number of writes
    pub writes: u64,
    /// Number of entries removed after their TTL elapsed
    pub expirations: u64,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Write ==
    /// Increments the write counter.
    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    // == Record Expirations ==
    /// Adds removed-after-expiry entries to the expiration counter.
    pub fn record_expirations(&mut self, count: u64) {
        self.expirations += count;
    }
}
