use friendpath_core::RobloxClient;
use friendpath_web::build_router;
use friendpath_web::config::ServerConfig;
use friendpath_web::state::AppState;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("friendpath_web=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match RobloxClient::with_endpoints(config.endpoints.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create Roblox client: {}", e);
            std::process::exit(1);
        }
    };

    let port = config.port;
    let app = build_router(Arc::new(AppState::new(client, config)));

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind port {}: {}", port, e);
            std::process::exit(1);
        }
    };

    info!("Server running on http://0.0.0.0:{}", port);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
