//! Larder Function - Serverless handler binary
//!
//! Reads one function event as JSON on stdin and writes the function response
//! as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use larder_domain::RecipeSearchService;
use larder_function::handle_raw_event;
use larder_spoonacular::{SpoonacularClient, SpoonacularConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr, stdout carries the response
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut raw = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw)
        .await
        .context("Failed to read function event from stdin")?;

    let client = SpoonacularClient::new(SpoonacularConfig::from_env())?;
    let service = RecipeSearchService::with_provider(client);

    let response = handle_raw_event(&service, &raw).await;
    info!(status_code = response.status_code, "Function event handled");

    let mut out = serde_json::to_vec(&response).context("Failed to encode function response")?;
    out.push(b'\n');

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&out).await?;
    stdout.flush().await?;

    Ok(())
}
