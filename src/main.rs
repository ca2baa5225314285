use anyhow::Context;
use dotenvy::dotenv;
use learnlive::logging::init_tracing;
use learnlive::metrics::{init_metrics, metrics_router};
use learnlive::router::init_router;
use learnlive::state::init_app_state;
use learnlive_config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;
    let metrics_handle = init_metrics()?;

    let state = init_app_state().await?;
    let server_config = ServerConfig::from_env()?;

    let mut app = init_router(state);
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_router(handle));
        tracing::info!("Prometheus metrics exposed at /metrics");
    }

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    tracing::info!(%address, "LearnLive API listening");
    tracing::info!("Swagger UI available at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app).await?;
    Ok(())
}
