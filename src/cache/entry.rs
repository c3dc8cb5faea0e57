//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == TTL Entry ==
/// Represents a single cache entry with value and expiration metadata.
///
/// Every entry expires; `expires_at` is fixed at creation time and never
/// extended by reads.
#[derive(Debug, Clone)]
pub struct TtlEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> TtlEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            created_at: now,
            expires_at: now + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so it is visible only
    /// while `now` is strictly before `expires_at`.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds.
    ///
    /// # Returns
    /// - `0` if the entry has expired (TTL elapsed)
    /// - the remaining milliseconds otherwise
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        self.expires_at.saturating_sub(now)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
