//! Assembles the site: the homepage and contact form at the root, the
//! read-only JSON listings under `/api`, and `/health` for the platform's
//! liveness probe.
//!
//! `main.rs` and the integration tests both go through [`build_app_router`],
//! so every test request passes the same layers a browser request does.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Correlates a request with its log lines; echoed back on the response.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Marker header sent by the site's own async contact form.
const REQUESTED_WITH_HEADER: &str = "x-requested-with";

/// Every route the site serves, before middleware.
fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::site::router())
        .nest("/api", routes::api_routes())
}

/// Build the site [`Router`] with its middleware.
///
/// Outermost first: CORS, request-id assignment, request tracing,
/// request-id echo, timeout, panic recovery.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_secs(config.request_timeout_secs);

    site_routes()
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for pages on other origins that read the listings or post the
/// contact form with `fetch`.
///
/// Only `GET` and `POST` are ever served. Panics on an origin that does not
/// parse, so a bad `CORS_ORIGINS` stops startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(REQUESTED_WITH_HEADER)])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
