//! Web front process

use itemstore::config::Config;
use itemstore::interface::web::{build_web_router, ApiClient};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting ItemStore web front");

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded: {:?}", config);

    // Client for the upstream item API
    let client = ApiClient::new(&config.web.api_url);
    info!("Proxying item actions to {}", config.web.api_url);

    // Start web server
    let app = build_web_router(client);
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.web.host, config.web.port)).await?;

    info!(
        "Web front listening on {}:{}",
        config.web.host, config.web.port
    );

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Web server failed");
    });

    // Keep the server running
    tokio::signal::ctrl_c().await?;
    info!("Shutting down...");

    server_handle.abort();
    info!("Web server stopped");

    Ok(())
}
