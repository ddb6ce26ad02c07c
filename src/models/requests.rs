//! Request DTOs for the key-value server API
//!
//! Defines the structure of incoming HTTP request bodies and their validation.
//! Fields are optional at the serde level so that a missing field surfaces as
//! an `InvalidArgument` with a readable message instead of a framework
//! rejection.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{CacheError, Result};

/// Request body for `POST /put`
///
/// `ttl` may be a JSON integer or a numeric string; absent or `null` stores a
/// permanent entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PutRequest {
    pub key: Option<String>,
    pub value: Option<String>,
    pub ttl: Option<Value>,
}

/// A validated put.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutCommand {
    pub key: String,
    pub value: String,
    pub ttl: Option<u64>,
}

impl PutRequest {
    /// Validates the request and extracts its arguments.
    pub fn validate(self) -> Result<PutCommand> {
        let key = validate_key(self.key)?;
        let value = self
            .value
            .ok_or_else(|| CacheError::InvalidArgument("Value is required".to_string()))?;
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidArgument(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }
        let ttl = self
            .ttl
            .as_ref()
            .map(|raw| parse_seconds("TTL", raw))
            .transpose()?;

        Ok(PutCommand { key, value, ttl })
    }
}

/// Request body for `POST /expire`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpireRequest {
    pub key: Option<String>,
    pub seconds: Option<Value>,
}

/// A validated expire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpireCommand {
    pub key: String,
    pub seconds: u64,
}

impl ExpireRequest {
    pub fn validate(self) -> Result<ExpireCommand> {
        let key = validate_key(self.key)?;
        let raw = self
            .seconds
            .ok_or_else(|| CacheError::InvalidArgument("Seconds is required".to_string()))?;
        let seconds = parse_seconds("Seconds", &raw)?;

        Ok(ExpireCommand { key, seconds })
    }
}

fn validate_key(key: Option<String>) -> Result<String> {
    let key = key.ok_or_else(|| CacheError::InvalidArgument("Key is required".to_string()))?;
    if key.is_empty() {
        return Err(CacheError::InvalidArgument("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidArgument(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(key)
}

/// Parses a positive whole number of seconds from a JSON number or string.
fn parse_seconds(field: &str, raw: &Value) -> Result<u64> {
    let parsed = match raw {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| CacheError::InvalidArgument(format!("{} must be an integer", field)))?,
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| CacheError::InvalidArgument(format!("{} must be a number", field)))?,
        _ => {
            return Err(CacheError::InvalidArgument(format!(
                "{} must be a number",
                field
            )))
        }
    };

    if parsed <= 0 {
        return Err(CacheError::InvalidArgument(format!(
            "{} must be a positive integer",
            field
        )));
    }

    Ok(parsed as u64)
}
