use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bangumi_api::config::ServerConfig;
use bangumi_api::router::build_app_router;
use bangumi_api::state::AppState;
use bangumi_catalog::Registry;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the wildcard CORS origin (matching the production default) and a
/// 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers.
///
/// This reuses the production router builder so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        registry: Arc::new(Registry::new()),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builder"),
    )
    .await
    .expect("infallible service")
}

/// Collect the response body into bytes.
pub async fn body_bytes(response: Response) -> Bytes {
    response
        .into_body()
        .collect()
        .await
        .expect("body collection")
        .to_bytes()
}

/// Collect and parse the response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body must be valid JSON")
}
