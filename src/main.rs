mod app;
mod middlewares;
mod routes;
mod services;
mod types;
mod utils;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utils::config::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting place sidebar on {}...", config.bind_addr);
    let app = app::gen_app(&config);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
