//! freshservice-mcp - MCP server for Freshservice
//!
//! This binary runs as an MCP server using stdio transport.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FRESHSERVICE_DOMAIN`: account host, e.g. `acme.freshservice.com`
//! - `FRESHSERVICE_APIKEY`: API key
//! - `FRESHSERVICE_TIMEOUT_SECS`: optional request timeout (default 30)
//!
//! # Usage
//!
//! ```bash
//! FRESHSERVICE_DOMAIN=acme.freshservice.com FRESHSERVICE_APIKEY=... ./freshservice-mcp
//! ```

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, EnvFilter};

use freshservice_mcp::{config, dispatch, fresh_client, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // stdout carries MCP JSON-RPC, so logs go to stderr
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("freshservice_mcp=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(
        "Starting freshservice-mcp v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = config::Config::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))
        .context("Failed to load configuration")?;

    tracing::debug!(?config, "Configuration loaded");

    let client = fresh_client::FreshClient::new(&config)
        .context("Failed to create Freshservice client")?;

    tracing::info!("Testing connection to Freshservice...");
    if let Err(e) = client.test_connection().await {
        tracing::warn!(
            error = %e,
            "Connection test failed; serving anyway. Check configuration and network connectivity."
        );
    }

    let dispatcher =
        dispatch::ToolDispatcher::new(client).context("Failed to build tool catalog")?;
    tracing::info!(tools = dispatcher.catalog().len(), "Tool catalog loaded");

    let server = server::FreshServer::new(dispatcher);

    tracing::info!("Server initialized, starting stdio transport");

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })
        .context("Failed to start server")?;

    tracing::info!("Server running, waiting for requests");

    service
        .waiting()
        .await
        .context("Server error during operation")?;

    tracing::info!("Server shutting down");

    Ok(())
}
