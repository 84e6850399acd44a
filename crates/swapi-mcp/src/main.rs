use std::time::Duration;

use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use swapi_client::{DEFAULT_BASE_URL, SwapiClient, SwapiConfig};
use swapi_mcp::SwapiServer;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "swapi-mcp", version)]
#[command(about = "SWAPI MCP server - Star Wars lookups over the Model Context Protocol")]
struct Cli {
    /// Base URL of the upstream SWAPI deployment
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the MCP frames, so logs go to stderr.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let config =
        SwapiConfig::new(cli.base_url).with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = SwapiClient::new(config)?;

    info!("Starting SWAPI MCP server on stdio");
    let service = SwapiServer::new(client).serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
