//! Plenário — legislative transparency API server.
//!
//! Proxies and reshapes the Câmara dos Deputados (and Senado) open-data
//! APIs for the dashboard frontend. No local storage: every request
//! re-fetches upstream.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = plenario_core::PlenarioConfig::from_env();
    let port = config.port;

    info!("Câmara API: {}", config.camara_base_url);
    info!("Senado API: {}", config.senado_base_url);

    let state = AppState::new(config)
        .map(Arc::new)
        .map_err(|e| anyhow::anyhow!("Failed to build upstream clients: {}", e))?;

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Plenário server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
