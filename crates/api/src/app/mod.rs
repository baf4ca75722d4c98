//! HTTP application wiring (Axum router + middleware stack).
//!
//! Layout mirrors the rest of the crate:
//! - `routes/`: HTTP routes + handlers, plus the not-found fallback
//! - `dto.rs`: response DTOs
//! - `errors.rs`: handler error type and its translation to HTTP responses

use std::sync::Arc;

use axum::Router;
use axum::extract::Extension;
use axum::http::{HeaderValue, Method, header};
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Request bodies beyond this many bytes are rejected with 413.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// Middleware order, outermost first: security headers, cross-origin policy,
/// body ceiling, request logging.
pub fn build_app(config: AppConfig) -> Router {
    let cors = cors_layer(&config);

    let trace = TraceLayer::new_for_http()
        .on_response(
            DefaultOnResponse::new()
                .level(tracing::Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().latency_unit(LatencyUnit::Millis));

    Router::new()
        .merge(routes::router())
        .fallback(routes::not_found)
        .layer(Extension(Arc::new(config)))
        .layer(trace)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
        .layer(axum::middleware::from_fn(middleware::security_headers))
}

/// Cross-origin policy: exactly the configured frontend origin, with
/// credentials allowed. Browsers enforce the restriction; the server only
/// emits (or withholds) the permissive headers.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    match config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => cors = cors.allow_origin(origin),
        Err(_) => tracing::warn!(
            url = %config.frontend_url,
            "FRONTEND_URL is not a valid origin; cross-origin requests will be refused"
        ),
    }

    cors
}
