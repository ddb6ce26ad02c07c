//! TTL Cleanup Task
//!
//! Background task that periodically removes expired entries, independent of
//! read traffic. Reads already hide expired entries, so the sweep only bounds
//! memory held by keys nobody touches again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. See [`sweep_expired`] for how each sweep locks the store.
///
/// # Arguments
/// * `cache` - shared reference to the store
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
/// * `batch_size` - Keys removed per write-lock acquisition
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(CacheStore::new()));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 1, 256);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<CacheStore>>,
    cleanup_interval_secs: u64,
    batch_size: usize,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds, batch size {}",
            cleanup_interval_secs, batch_size
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = sweep_expired(&cache, batch_size).await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

/// Runs one sweep over the store and returns the number of entries removed.
///
/// Candidates are listed under the read lock, then removed in batches of
/// `batch_size`, taking the write lock once per batch. Each key is re-checked
/// under the write lock, so a key rewritten by a concurrent put is kept.
pub async fn sweep_expired(cache: &RwLock<CacheStore>, batch_size: usize) -> usize {
    let candidates = cache.read().await.expired_keys();
    let mut removed = 0;

    for batch in candidates.chunks(batch_size.max(1)) {
        let mut cache_guard = cache.write().await;
        removed += cache_guard.remove_expired(batch);
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(CacheStore::new()));

        cache
            .write()
            .await
            .put("expire_soon".to_string(), "value".to_string(), Some(1));

        let handle = spawn_cleanup_task(cache.clone(), 1, 16);

        // Wait for entry to expire and cleanup to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Checked through len() so the lazy path cannot be what removed it
        assert_eq!(cache.read().await.len(), 0, "Sweeper should remove expired entry");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = Arc::new(RwLock::new(CacheStore::new()));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.put("long_lived".to_string(), "value".to_string(), Some(3600));
            cache_guard.put("forever".to_string(), "value".to_string(), None);
        }

        let handle = spawn_cleanup_task(cache.clone(), 1, 16);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            assert_eq!(cache_guard.get("long_lived").unwrap(), "value");
            assert_eq!(cache_guard.get("forever").unwrap(), "value");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_removes_in_batches() {
        let cache = RwLock::new(CacheStore::new());

        {
            let mut cache_guard = cache.write().await;
            for i in 0..10 {
                cache_guard.put(format!("k{}", i), "v".to_string(), Some(1));
            }
            cache_guard.put("keep".to_string(), "v".to_string(), None);
        }

        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert_eq!(sweep_expired(&cache, 3).await, 10);
        assert_eq!(cache.read().await.len(), 1);
        assert_eq!(sweep_expired(&cache, 3).await, 0);
    }

    #[tokio::test]
    async fn test_sweep_with_zero_batch_size() {
        let cache = RwLock::new(CacheStore::new());
        cache
            .write()
            .await
            .put("k".to_string(), "v".to_string(), Some(1));

        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert_eq!(sweep_expired(&cache, 0).await, 1);
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = Arc::new(RwLock::new(CacheStore::new()));

        let handle = spawn_cleanup_task(cache, 1, 16);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
