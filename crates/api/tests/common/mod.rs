#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use folio_api::config::{DatabaseLocation, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::DbPool;
use folio_events::{Notifier, RecordingNotifier};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret";
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        secret_key: TEST_SECRET.to_string(),
        database: DatabaseLocation::Url(folio_db::MEMORY_URL.to_string()),
        admin_email: Some(ADMIN_EMAIL.to_string()),
    }
}

/// A fresh in-memory store, schema created and seeded.
pub async fn test_pool() -> DbPool {
    let pool = folio_db::create_pool(folio_db::MEMORY_URL).await.unwrap();
    folio_db::initialize(&pool).await.unwrap();
    pool
}

/// Build the full application router around `pool` and `notifier`.
///
/// Uses [`build_app_router`] so tests exercise the production middleware
/// stack.
pub fn build_app(pool: DbPool, config: ServerConfig, notifier: Arc<dyn Notifier>) -> Router {
    let state = AppState::new(pool, config.clone(), notifier);
    build_app_router(state, &config)
}

/// Build an app with the default test config and a recording notifier.
pub fn build_test_app(pool: DbPool) -> (Router, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let app = build_app(pool, test_config(), notifier.clone());
    (app, notifier)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a form-encoded body. `extra` headers are added verbatim.
pub async fn post_form(
    app: &Router,
    uri: &str,
    body: &str,
    extra: &[(&str, &str)],
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded");
    for (name, value) in extra {
        builder = builder.header(*name, *value);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// Boundary used by [`post_multipart`].
pub const BOUNDARY: &str = "XBOUNDARY";

/// POST a `multipart/form-data` body built from text `parts`.
pub async fn post_multipart(
    app: &Router,
    uri: &str,
    parts: &[(&str, &str)],
    extra: &[(&str, &str)],
) -> Response<Body> {
    let mut body = String::new();
    for (name, value) in parts {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    for (name, value) in extra {
        builder = builder.header(*name, *value);
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// The `name=value` part of the first `Set-Cookie` header for `name`.
pub fn set_cookie(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{name}=")))
        .map(str::to_string)
}
