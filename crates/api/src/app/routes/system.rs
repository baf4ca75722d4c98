use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use chrono::{SecondsFormat, Utc};

use crate::app::dto::{ApiDescriptor, HealthResponse};
use crate::config::AppConfig;

/// `GET /health` — confirms the server is up and reports the runtime mode.
pub async fn health(Extension(config): Extension<Arc<AppConfig>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "FleetForge API is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: config.env.as_str().to_string(),
    })
}

/// `GET /api/v1` — static descriptor of the API surface.
pub async fn api_index() -> Json<ApiDescriptor> {
    Json(ApiDescriptor::current())
}
