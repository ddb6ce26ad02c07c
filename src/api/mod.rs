//! API Module
//!
//! HTTP handlers and routing for the key-value server REST API.
//!
//! # Endpoints
//! - `POST /put` - Store a key-value pair with optional TTL
//! - `GET /get/:key` - Retrieve a value by key
//! - `DELETE /delete/:key` - Delete a key
//! - `GET /show` - List all live keys and values
//! - `POST /expire` - Set a key's expiration
//! - `GET /ttl/:key` - Remaining seconds, or -1 for a permanent key
//! - `POST /persist/:key` - Remove a key's expiration
//! - `GET /stats` - Live key counts
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
