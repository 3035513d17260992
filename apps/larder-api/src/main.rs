//! Larder API - Standalone server
//!
//! HTTP service answering recipe searches through the Spoonacular provider.

use anyhow::Result;
use larder_api::{create_router, AppState, ServerConfig};
use larder_domain::RecipeSearchService;
use larder_spoonacular::{SpoonacularClient, SpoonacularConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before the log filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Larder API server");

    let provider_config = SpoonacularConfig::from_env();
    info!(config = ?provider_config, "Initializing Spoonacular provider");

    let client = SpoonacularClient::new(provider_config)?;
    let service = RecipeSearchService::with_provider(client);
    let state = AppState::new(service);

    let server_config = ServerConfig::from_env();
    if let Some(dir) = &server_config.static_dir {
        info!(static_dir = %dir.display(), "Serving front-end files");
    }

    // Build HTTP router
    let app = create_router(state, &server_config);

    let addr = server_config.addr();
    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
