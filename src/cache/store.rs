//! Cache Store Module
//!
//! Key-value table with per-entry expiration. Every key-addressed operation
//! checks liveness before acting, so an expired entry is never observed even
//! if the background sweeper has not reached it yet.

use std::collections::{BTreeMap, HashMap};

use crate::cache::{current_timestamp_ms, CacheEntry, CacheStats};
use crate::error::{CacheError, Result};

// == TTL Status ==
/// Remaining lifetime of a live key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlStatus {
    /// Whole seconds left, rounded up
    Remaining(u64),
    /// The key never expires
    Permanent,
}

// == Cache Store ==
/// In-memory key-value storage with lazy expiration.
///
/// The store itself is not synchronized; callers share it as
/// `Arc<RwLock<CacheStore>>`. Methods that may evict take `&mut self`.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Live Lookup ==
    /// Returns the live entry for `key`, evicting it first if it has expired.
    fn live_entry_mut(&mut self, key: &str, now: u64) -> Option<&mut CacheEntry> {
        if self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(now))
        {
            self.entries.remove(key);
            return None;
        }
        self.entries.get_mut(key)
    }

    fn live_entries(&self, now: u64) -> impl Iterator<Item = (&String, &CacheEntry)> {
        self.entries
            .iter()
            .filter(move |(_, entry)| !entry.is_expired_at(now))
    }

    // == Put ==
    /// Stores a key-value pair, fully replacing any previous entry.
    ///
    /// `ttl` of `None` or `Some(0)` stores a permanent entry, so a put without
    /// TTL on an expiring key makes it permanent.
    pub fn put(&mut self, key: String, value: String, ttl: Option<u64>) {
        let entry = CacheEntry::new_at(value, ttl, current_timestamp_ms());
        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Retrieves a live value by key.
    pub fn get(&mut self, key: &str) -> Result<String> {
        let now = current_timestamp_ms();
        self.live_entry_mut(key, now)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Delete ==
    /// Removes a live entry. An expired entry is dropped but still reported as
    /// not found.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        let now = current_timestamp_ms();
        match self.entries.remove(key) {
            Some(entry) if !entry.is_expired_at(now) => Ok(()),
            _ => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Expire ==
    /// Sets a live entry to expire `seconds` from now, replacing any previous
    /// expiration. Callers reject non-positive values before reaching here.
    pub fn expire(&mut self, key: &str, seconds: u64) -> Result<()> {
        let now = current_timestamp_ms();
        let entry = self
            .live_entry_mut(key, now)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;
        entry.expire_at(seconds, now);
        Ok(())
    }

    // == TTL ==
    /// Reports how long a live key has left.
    pub fn ttl(&mut self, key: &str) -> Result<TtlStatus> {
        let now = current_timestamp_ms();
        let entry = self
            .live_entry_mut(key, now)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;

        Ok(match entry.ttl_remaining_at(now) {
            Some(seconds) => TtlStatus::Remaining(seconds),
            None => TtlStatus::Permanent,
        })
    }

    // == Persist ==
    /// Removes the expiration from a live entry.
    pub fn persist(&mut self, key: &str) -> Result<()> {
        let now = current_timestamp_ms();
        let entry = self
            .live_entry_mut(key, now)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))?;
        entry.persist_at(now);
        Ok(())
    }

    // == Snapshot ==
    /// Returns every live key with its value, ordered by key.
    ///
    /// Expired entries that have not been swept yet are filtered out here
    /// rather than removed, so this only needs shared access.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.live_entries(current_timestamp_ms())
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    // == Stats ==
    /// Returns key counts over the live set.
    pub fn stats(&self) -> CacheStats {
        self.live_entries(current_timestamp_ms())
            .map(|(_, entry)| entry)
            .collect()
    }

    // == Sweeping ==
    /// Lists keys whose expiration has passed.
    pub fn expired_keys(&self) -> Vec<String> {
        let now = current_timestamp_ms();
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Removes the given keys if they are still expired.
    ///
    /// Keys are re-checked because they may have been rewritten since
    /// [`expired_keys`](Self::expired_keys) listed them. Returns the number
    /// of entries removed.
    pub fn remove_expired(&mut self, keys: &[String]) -> usize {
        let now = current_timestamp_ms();
        let mut removed = 0;

        for key in keys {
            if self
                .entries
                .get(key)
                .is_some_and(|entry| entry.is_expired_at(now))
            {
                self.entries.remove(key);
                removed += 1;
            }
        }

        removed
    }

    // == Cleanup Expired ==
    /// Removes all expired entries in one pass.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired = self.expired_keys();
        self.remove_expired(&expired)
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet
    /// removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn insert_entry(&mut self, key: &str, entry: CacheEntry) {
        self.entries.insert(key.to_string(), entry);
    }
}
