use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use recommend_api::{config::Config, create_router, routes::cors_layer, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recommend_api=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    // Initialize application state
    let state = Arc::new(AppState::from_config(&config).await?);

    // Create the router with all routes
    let app = create_router(state).layer(cors_layer(&config.cors_allowed_origin)?);

    // Start the server
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, store = config.store_backend.as_str(), "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
