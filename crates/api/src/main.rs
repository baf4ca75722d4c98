use std::net::SocketAddr;

use fleetforge_api::config::AppConfig;
use fleetforge_observability::LogFormat;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    fleetforge_observability::init(if config.env.is_production() {
        LogFormat::Json
    } else {
        LogFormat::Compact
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let env_label = config.env.as_str().to_string();

    let app = fleetforge_api::app::build_app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(environment = %env_label, "FleetForge API listening on {}", listener.local_addr()?);
    tracing::info!("endpoints: GET /health, GET /api/v1");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
