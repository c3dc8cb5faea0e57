//! TTL Store Module
//!
//! Generic expiring key-value storage with lazy expiration on read.
//! Knows nothing about digests; expiration semantics live here and
//! nowhere else.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{current_timestamp_ms, StoreStats, TtlEntry};

// == TTL Store ==
/// Expiring key-value store. Every entry is stamped with an absolute
/// expiration instant at write time; an expired entry is removed on the
/// next read that touches it.
///
/// The store itself is infallible: absence and expiry are both reported
/// as `None`, never as errors.
#[derive(Debug)]
pub struct TtlStore<V> {
    /// Key-value storage
    entries: HashMap<String, TtlEntry<V>>,
    /// Time-to-live applied to every write
    ttl: Duration,
    /// Activity counters
    stats: StoreStats,
}

impl<V: Clone> TtlStore<V> {
    // == Constructor ==
    /// Creates a new TtlStore applying `ttl` to every entry.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: StoreStats::new(),
        }
    }

    // == Set ==
    /// Stores a value under `key`, expiring `ttl` from now.
    ///
    /// Unconditional overwrite: any previous entry under the key is fully
    /// replaced and its remaining TTL discarded.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let entry = TtlEntry::new(value, self.ttl);
        self.entries.insert(key.into(), entry);
        self.stats.record_write();
    }

    // == Get ==
    /// Retrieves the value under `key` if present and unexpired.
    ///
    /// An expired entry is removed as a side effect of the read, so the
    /// store never retains stale entries past the first access. A live
    /// read returns the stored value unchanged and does not touch its
    /// expiration instant.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clear ==
    /// Removes the entry under `key` regardless of expiry state.
    ///
    /// Idempotent: clearing an absent key is a no-op.
    pub fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Contains ==
    /// Returns true if a live (unexpired) entry exists under `key`.
    ///
    /// Non-mutating: expired entries are left in place for the next
    /// `get` or sweep to remove.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    // == TTL Remaining ==
    /// Returns the remaining lifetime of the entry under `key`, or None
    /// when absent or expired. Non-mutating.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        let entry = self.entries.get(key)?;
        let now = current_timestamp_ms();
        if now >= entry.expires_at {
            return None;
        }
        Some(Duration::from_millis(entry.expires_at - now))
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.record_expirations(count as u64);
        count
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> StoreStats {
        self.stats.clone()
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
