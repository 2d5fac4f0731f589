//! # Nimbus Weather Gateway Server
//!
//! Main entry point: loads configuration, connects the database, wires the
//! DI module, and serves the REST API until shutdown.

use nimbus_config::ConfigLoader;
use nimbus_core::{NimbusError, NimbusResult};
use nimbus_repository::{create_pool, DatabasePoolInterface};
use nimbus_rest::create_router;
use tokio::signal;
use tracing::{error, info};

mod di;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Nimbus Weather Gateway...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> NimbusResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Create database pool and run migrations
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Build DI module - centralized dependency injection
    let module = di::build_app_module(&config, db_pool.inner()?.clone())?;

    // Create REST router
    let router = create_router(module.as_ref(), &config.server);

    // Start REST server
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| NimbusError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| NimbusError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nimbus=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
