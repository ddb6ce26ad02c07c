//! Cache Module
//!
//! Provides in-memory key-value storage with per-entry TTL, lazy expiration
//! on access and live-set statistics.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::{CacheStore, TtlStatus};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
