//! Item API process

use itemstore::config::Config;
use itemstore::domain::item::ItemRepository;
use itemstore::infrastructure::persistence::{
    create_pool, run_migrations, DatabaseConfig, PgItemRepository,
};
use itemstore::interface::api::{build_router, init_metrics, AppState};
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting ItemStore API");

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded: {:?}", config);

    // Create database pool
    info!("Initializing database connection...");
    let db_config = DatabaseConfig::with_url(config.database.url.clone());
    let pool = create_pool(&db_config).await?;
    info!("Database connection pool created");

    // Run migrations
    info!("Running database migrations...");
    run_migrations(&pool).await?;
    info!("Database migrations completed");

    // Create item repository
    let item_repository: Arc<dyn ItemRepository> = Arc::new(PgItemRepository::new(pool));
    info!("Item repository initialized");

    // Initialize metrics exporter
    info!("Initializing Prometheus metrics exporter");
    let prometheus_handle = init_metrics();

    // Start REST API server
    let state = AppState { item_repository };
    let app = build_router(state, prometheus_handle);
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.api.host, config.api.port)).await?;

    info!(
        "REST API server listening on {}:{}",
        config.api.host, config.api.port
    );

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("API server failed");
    });

    // Keep the server running
    tokio::signal::ctrl_c().await?;
    info!("Shutting down...");

    server_handle.abort();
    info!("API server stopped");

    Ok(())
}
