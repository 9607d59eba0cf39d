use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use mydiary_api::config::ServerConfig;
use mydiary_api::router::build_app_router;
use mydiary_api::state::AppState;
use mydiary_illustrator::api::IllustratorApi;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and points the illustration client at a closed local port, so any test
/// that forgets to wire a stub exercises the failure fallback instead of
/// calling out of the sandbox.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        illustrator_url: "http://127.0.0.1:9".to_string(),
        illustrator_timeout_secs: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and the default (unreachable) illustration service.
pub fn build_test_app(pool: PgPool) -> Router {
    let url = test_config().illustrator_url;
    build_test_app_with_illustrator(pool, url)
}

/// Build the application router against a specific illustration service
/// URL (normally a wiremock stub started by the test).
///
/// This goes through [`build_app_router`] so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app_with_illustrator(pool: PgPool, illustrator_url: String) -> Router {
    let mut config = test_config();
    config.illustrator_url = illustrator_url;

    let illustrator = IllustratorApi::new(
        config.illustrator_url.clone(),
        Duration::from_secs(config.illustrator_timeout_secs),
    );

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        illustrator: Arc::new(illustrator),
    };

    build_app_router(state, &config)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
