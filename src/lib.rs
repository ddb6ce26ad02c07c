//! ttl_kv - An in-memory key-value server
//!
//! Stores string values under string keys with optional per-key TTL. Expired
//! entries are hidden on every read and removed by a background sweeper.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
