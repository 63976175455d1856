//! EduPlatform backend
//!
//! Main application entry point

use tokio::net::TcpListener;
use tracing::{error, info};

use edu_platform::{build_app, build_store, config::Settings, utils::logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file appender on drop
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", edu_platform::info());

    let store = build_store(&settings).await?;
    let app = build_app(store, &settings);

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(address = %address, "Listening for HTTP requests");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server terminated with error");
        return Err(e.into());
    }

    info!("EduPlatform stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
