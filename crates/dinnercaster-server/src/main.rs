use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dinnercaster_mcp::StdioServer;
use dinnercaster_server::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // stdout is reserved for responses in stdio mode
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if config.stdio {
        StdioServer::stdio().run().await?;
        return Ok(());
    }

    let app = dinnercaster_server::router::create_router();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Dinnercaster3 listening on {addr}");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
