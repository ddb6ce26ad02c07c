//! Response DTOs for the key-value server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::{CacheStats, TtlStatus};

/// TTL reported for a key that never expires.
pub const PERMANENT_TTL: i64 = -1;

/// Response body for `POST /put`
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: String,
}

impl PutResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            message: "Data stored successfully".to_string(),
            key: key.into(),
        }
    }
}

/// Response body for `GET /get/:key`
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for `DELETE /delete/:key`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for `GET /show`: every live key mapped to its value.
pub type ShowResponse = BTreeMap<String, String>;

/// Plain confirmation used by `POST /expire` and `POST /persist/:key`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn expiring(seconds: u64) -> Self {
        Self {
            message: format!("Key will expire in {} seconds", seconds),
        }
    }

    pub fn persisted() -> Self {
        Self {
            message: "Key is now persistent (no expiration)".to_string(),
        }
    }
}

/// Response body for `GET /ttl/:key`
///
/// `ttl` is [`PERMANENT_TTL`] when the key has no expiration.
#[derive(Debug, Clone, Serialize)]
pub struct TtlResponse {
    pub ttl: i64,
    pub message: String,
}

impl From<TtlStatus> for TtlResponse {
    fn from(status: TtlStatus) -> Self {
        match status {
            TtlStatus::Remaining(seconds) => Self {
                ttl: i64::try_from(seconds).unwrap_or(i64::MAX),
                message: format!("{} seconds remaining", seconds),
            },
            TtlStatus::Permanent => Self {
                ttl: PERMANENT_TTL,
                message: "Key has no expiration".to_string(),
            },
        }
    }
}

/// Response body for `GET /stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of live keys
    pub total_keys: usize,
    /// Live keys without expiration
    pub persistent_keys: usize,
    /// Live keys with an expiration
    pub expiring_keys: usize,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            total_keys: stats.total_keys,
            persistent_keys: stats.persistent_keys,
            expiring_keys: stats.expiring_keys,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ttl_response_permanent_uses_sentinel() {
        let resp = TtlResponse::from(TtlStatus::Permanent);
        assert_eq!(resp.ttl, -1);
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"ttl": -1, "message": "Key has no expiration"})
        );
    }

    #[test]
    fn test_ttl_response_remaining() {
        let resp = TtlResponse::from(TtlStatus::Remaining(42));
        assert_eq!(resp.ttl, 42);
        assert!(resp.message.contains("42"));
    }

    #[test]
    fn test_stats_response_field_names() {
        let stats = CacheStats {
            total_keys: 3,
            persistent_keys: 2,
            expiring_keys: 1,
        };
        assert_eq!(
            serde_json::to_value(StatsResponse::from(stats)).unwrap(),
            json!({"total_keys": 3, "persistent_keys": 2, "expiring_keys": 1})
        );
    }

    #[test]
    fn test_message_responses() {
        assert_eq!(
            MessageResponse::expiring(10).message,
            "Key will expire in 10 seconds"
        );
        assert!(MessageResponse::persisted().message.contains("persistent"));
    }

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::new("deleted_key");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("deleted_key"));
        assert!(json.contains("deleted"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"error": "Something went wrong"})
        );
    }
}
