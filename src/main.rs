//! Salesforce Event Feed
//!
//! Main application entry point

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use sf_event_feed::{
    build_router,
    config::Settings,
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up credentials from a local .env before reading configuration
    dotenv::dotenv().ok();

    let settings = Settings::new()?;
    settings.validate()?;

    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", sf_event_feed::info());

    let services = ServiceFactory::new(settings.clone())?;
    if services.auth.is_caching() {
        info!(ttl_seconds = settings.salesforce.token_ttl_seconds, "Salesforce token caching enabled");
    }

    let app = build_router(Arc::new(services));

    let bind_addr = settings.server.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Event feed has been shut down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
