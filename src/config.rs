//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Interval in seconds between background expiration sweeps
    pub cleanup_interval: u64,
    /// Keys removed per write-lock acquisition during a sweep
    pub sweep_batch_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 1)
    /// - `SWEEP_BATCH_SIZE` - Keys removed per lock acquisition (default: 256)
    ///
    /// Unparseable values fall back to the default. Zero is rejected for the
    /// interval and batch size.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.cleanup_interval),
            sweep_batch_size: env::var("SWEEP_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.sweep_batch_size),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval: 1,
            sweep_batch_size: 256,
        }
    }
}
