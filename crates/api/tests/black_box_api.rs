use chrono::DateTime;
use reqwest::StatusCode;
use serde_json::Value;

use fleetforge_api::app::{MAX_BODY_BYTES, build_app};
use fleetforge_api::config::{AppConfig, RuntimeEnv};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(config: AppConfig) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = build_app(config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        frontend_url: "http://localhost:3000".to_string(),
        env: RuntimeEnv::new("test"),
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let srv = TestServer::spawn(test_config()).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "FleetForge API is running");
    assert_eq!(body["environment"], "test");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn api_descriptor_lists_declared_endpoints() {
    let srv = TestServer::spawn(test_config()).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/v1", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "FleetForge API");
    assert_eq!(body["version"], "1.0.0");

    let endpoints = body["endpoints"].as_object().unwrap();
    let mut keys: Vec<_> = endpoints.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["customers", "equipment", "health", "invoices", "leases"]
    );
    assert_eq!(endpoints["health"], "/health");
    assert_eq!(endpoints["leases"], "/api/v1/leases");
}

#[tokio::test]
async fn unknown_path_returns_404_with_path_echo() {
    let srv = TestServer::spawn(test_config()).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/nonexistent", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "Route GET /nonexistent not found");
    assert_eq!(body["path"], "/nonexistent");
}

#[tokio::test]
async fn unregistered_method_returns_404() {
    let srv = TestServer::spawn(test_config()).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Route POST /health not found");
    assert_eq!(body["path"], "/health");
}

#[tokio::test]
async fn oversized_body_is_rejected_and_server_keeps_serving() {
    let srv = TestServer::spawn(test_config()).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/v1", srv.base_url))
        .body(vec![0u8; MAX_BODY_BYTES + 1])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

    // The failure is per-request; the process must still answer.
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn configured_origin_gets_cors_headers() {
    let srv = TestServer::spawn(test_config()).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        res.headers()
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn other_origins_get_no_cors_headers() {
    let srv = TestServer::spawn(test_config()).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .header("origin", "http://evil.example")
        .send()
        .await
        .unwrap();

    assert!(res.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn security_headers_are_applied_to_all_responses() {
    let srv = TestServer::spawn(test_config()).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(
        res.headers()
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
    assert_eq!(
        res.headers()
            .get("x-frame-options")
            .and_then(|v| v.to_str().ok()),
        Some("SAMEORIGIN")
    );
    assert_eq!(
        res.headers()
            .get("referrer-policy")
            .and_then(|v| v.to_str().ok()),
        Some("no-referrer")
    );

    // Fallback responses are behind the same stack.
    let res = client
        .get(format!("{}/nonexistent", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.headers()
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );
}
