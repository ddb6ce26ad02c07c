//! Cache Entry Module
//!
//! Defines the structure for individual entries with optional expiration.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single stored value and its metadata.
///
/// All timestamps are Unix milliseconds. The `_at` variants of the methods
/// take the current time explicitly so a store operation evaluates liveness
/// against a single instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Creation timestamp
    pub created_at: u64,
    /// Last mutation timestamp (put, expire or persist)
    pub updated_at: u64,
    /// Expiration timestamp, None = permanent
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry with optional TTL.
    ///
    /// A TTL of zero is treated the same as no TTL: the entry is permanent.
    pub fn new(value: String, ttl_seconds: Option<u64>) -> Self {
        Self::new_at(value, ttl_seconds, current_timestamp_ms())
    }

    /// Creates a new entry as of `now`.
    pub fn new_at(value: String, ttl_seconds: Option<u64>, now: u64) -> Self {
        Self {
            value,
            created_at: now,
            updated_at: now,
            expires_at: ttl_seconds
                .filter(|ttl| *ttl > 0)
                .map(|ttl| deadline(now, ttl)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is greater
    /// than or equal to its expiration time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    /// Returns true if the entry never expires.
    pub fn is_permanent(&self) -> bool {
        self.expires_at.is_none()
    }

    // == Expiration Updates ==
    /// Sets the expiration to `seconds` from `now`, replacing any previous one.
    pub fn expire_at(&mut self, seconds: u64, now: u64) {
        self.expires_at = Some(deadline(now, seconds));
        self.updated_at = now;
    }

    /// Clears the expiration, making the entry permanent.
    pub fn persist_at(&mut self, now: u64) {
        self.expires_at = None;
        self.updated_at = now;
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    ///
    /// Returns `Some(0)` once the entry has expired.
    pub fn ttl_remaining_ms_at(&self, now: u64) -> Option<u64> {
        self.expires_at
            .map(|expires| expires.saturating_sub(now))
    }

    /// Returns remaining TTL in whole seconds, rounded up.
    ///
    /// A live entry never reports `Some(0)`: 400ms left reports 1 second, so a
    /// caller that sees time remaining can still read the key.
    pub fn ttl_remaining_at(&self, now: u64) -> Option<u64> {
        self.ttl_remaining_ms_at(now).map(|ms| ms.div_ceil(1000))
    }
}

/// Absolute expiration for a TTL starting at `now`, saturating on overflow.
fn deadline(now: u64, ttl_seconds: u64) -> u64 {
    now.saturating_add(ttl_seconds.saturating_mul(1000))
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
