//! Cache Statistics Module
//!
//! Aggregate key counts derived from the live entries of a store.

use serde::Serialize;

use crate::cache::CacheEntry;

// == Cache Stats ==
/// Key counts over the live set.
///
/// Always satisfies `persistent_keys + expiring_keys == total_keys`, since
/// `total_keys` is derived from the other two rather than counted separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of live entries
    pub total_keys: usize,
    /// Live entries without an expiration
    pub persistent_keys: usize,
    /// Live entries with an expiration
    pub expiring_keys: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Entry ==
    /// Counts one live entry.
    pub fn record(&mut self, entry: &CacheEntry) {
        if entry.is_permanent() {
            self.persistent_keys += 1;
        } else {
            self.expiring_keys += 1;
        }
        self.total_keys = self.persistent_keys + self.expiring_keys;
    }
}

impl<'a> FromIterator<&'a CacheEntry> for CacheStats {
    fn from_iter<I: IntoIterator<Item = &'a CacheEntry>>(iter: I) -> Self {
        let mut stats = Self::new();
        for entry in iter {
            stats.record(entry);
        }
        stats
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.total_keys, 0);
        assert_eq!(stats.persistent_keys, 0);
        assert_eq!(stats.expiring_keys, 0);
    }

    #[test]
    fn test_record_splits_by_expiration() {
        let mut stats = CacheStats::new();
        stats.record(&CacheEntry::new_at("a".to_string(), None, 0));
        stats.record(&CacheEntry::new_at("b".to_string(), Some(10), 0));
        stats.record(&CacheEntry::new_at("c".to_string(), Some(20), 0));

        assert_eq!(stats.persistent_keys, 1);
        assert_eq!(stats.expiring_keys, 2);
        assert_eq!(stats.total_keys, 3);
    }

    #[test]
    fn test_collect_from_entries() {
        let entries = [
            CacheEntry::new_at("a".to_string(), None, 0),
            CacheEntry::new_at("b".to_string(), None, 0),
        ];

        let stats: CacheStats = entries.iter().collect();
        assert_eq!(stats.persistent_keys, 2);
        assert_eq!(stats.expiring_keys, 0);
        assert_eq!(stats.total_keys, 2);
    }
}
