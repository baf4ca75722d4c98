use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

pub mod system;

/// Router for the informational endpoints.
///
/// Method misses on registered paths fall through to `not_found` so every
/// unregistered method/path pair gets the same 404 shape.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health).fallback(not_found))
        .route("/api/v1", get(system::api_index).fallback(not_found))
}

/// Fallback for any request no handler matches.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    let path = uri.path();
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": format!("Route {method} {path} not found"),
            "path": path,
        })),
    )
        .into_response()
}
