use axum::routing::{get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use chunk_rerank::api;
use chunk_rerank::config::Config;
use chunk_rerank::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Max chunks per request: {}", config.max_chunks);
    if !config.default_important_sections.is_empty() {
        tracing::info!(
            "Default important sections: {:?}",
            config.default_important_sections
        );
    }

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config);

    let app = Router::new()
        .route("/api/health", get(api::rerank::health))
        .route("/api/classify", post(api::rerank::classify_query))
        .route("/api/rerank", post(api::rerank::rerank))
        .route("/api/section-boost", post(api::rerank::section_boost))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
