use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use trip_log_service::api;
use trip_log_service::config::environment::EnvironmentConfig;
use trip_log_service::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use trip_log_service::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚚 Trip Log Service - HOS/ELD compliance");
    info!("=========================================");

    let config = EnvironmentConfig::default();
    info!("🗺️ Route backend: {}", config.route_backend_url);
    info!("🌐 Geocoding provider: {}", config.nominatim_url);

    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(config)?;

    let app = api::create_api_router().layer(cors).with_state(state);

    info!("🌐 Server starting on http://{}", addr);
    info!("🔍 Endpoints:");
    info!("   POST /api/trips/calculate - Compute route and derive ELD duty log");
    info!("   GET  /api/geocoding/reverse - Resolve a coordinate to a place label");
    info!("   GET  /api/health - Health check with backend probe");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

/// Graceful shutdown on Ctrl+C or SIGTERM
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
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
