//! API Handlers
//!
//! HTTP request handlers for each key-value server endpoint. Handlers validate
//! input, run one store operation under the lock and serialize the result.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::Result;
use crate::models::{
    DeleteResponse, ExpireRequest, GetResponse, HealthResponse, MessageResponse, PutRequest,
    PutResponse, ShowResponse, StatsResponse, TtlResponse,
};

/// Application state shared across all handlers.
///
/// Contains the store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone, Default)]
pub struct AppState {
    /// Thread-safe key-value store
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }
}

/// Handler for POST /put
///
/// Stores a key-value pair with optional TTL, replacing any previous entry.
pub async fn put_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PutRequest>, JsonRejection>,
) -> Result<Json<PutResponse>> {
    let Json(req) = payload?;
    let cmd = req.validate()?;

    debug!(key = %cmd.key, ttl = ?cmd.ttl, "put");
    state.cache.write().await.put(cmd.key.clone(), cmd.value, cmd.ttl);

    Ok(Json(PutResponse::new(cmd.key)))
}

/// Handler for GET /get/:key
///
/// Takes the write lock because an expired entry is evicted on access.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.cache.write().await.get(&key)?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for DELETE /delete/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.cache.write().await.delete(&key)?;

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for GET /show
///
/// Returns every live key and value; an empty object when there are none.
pub async fn show_handler(State(state): State<AppState>) -> Json<ShowResponse> {
    Json(state.cache.read().await.snapshot())
}

/// Handler for POST /expire
pub async fn expire_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ExpireRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(req) = payload?;
    let cmd = req.validate()?;

    state.cache.write().await.expire(&cmd.key, cmd.seconds)?;

    Ok(Json(MessageResponse::expiring(cmd.seconds)))
}

/// Handler for GET /ttl/:key
pub async fn ttl_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<TtlResponse>> {
    let status = state.cache.write().await.ttl(&key)?;

    Ok(Json(TtlResponse::from(status)))
}

/// Handler for POST /persist/:key
pub async fn persist_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.cache.write().await.persist(&key)?;

    Ok(Json(MessageResponse::persisted()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();

    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
