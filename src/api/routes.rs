//! API Routes
//!
//! Configures the Axum router with all key-value server endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_handler, expire_handler, get_handler, health_handler, persist_handler, put_handler,
    show_handler, stats_handler, ttl_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, since the browser UI may be served elsewhere
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/put", post(put_handler))
        .route("/get/:key", get(get_handler))
        .route("/delete/:key", delete(delete_handler))
        .route("/show", get(show_handler))
        .route("/expire", post(expire_handler))
        .route("/ttl/:key", get(ttl_handler))
        .route("/persist/:key", post(persist_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::default())
    }

    async fn status_of(app: Router, method: &str, uri: &str, body: Option<&str>) -> StatusCode {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let status = status_of(create_test_app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_put_endpoint() {
        let status = status_of(
            create_test_app(),
            "POST",
            "/put",
            Some(r#"{"key":"test","value":"hello"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_keys_are_not_found() {
        for (method, uri) in [
            ("GET", "/get/nonexistent"),
            ("DELETE", "/delete/nonexistent"),
            ("GET", "/ttl/nonexistent"),
            ("POST", "/persist/nonexistent"),
        ] {
            let status = status_of(create_test_app(), method, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        }
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let status = status_of(create_test_app(), "GET", "/put", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
