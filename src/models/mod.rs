//! Request and Response models for the key-value server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ExpireCommand, ExpireRequest, PutCommand, PutRequest};
pub use responses::{
    DeleteResponse, ErrorResponse, GetResponse, HealthResponse, MessageResponse, PutResponse,
    ShowResponse, StatsResponse, TtlResponse, PERMANENT_TTL,
};
