use std::sync::Arc;

use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    services::{
        place_directory::{
            directory::PlaceDirectory,
            google_directory::{GoogleDirectory, GoogleDirectoryConfig},
        },
        sidebar::sidebar_service::SidebarService,
    },
    types::app_state::AppState,
    utils::config::Config,
};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn gen_app(config: &Config) -> Router {
    let directory = GoogleDirectory::new(GoogleDirectoryConfig {
        api_key: config.maps_api_key.clone(),
        host: config.maps_host.clone(),
    });

    gen_app_with_directory(Arc::new(directory), config.auth_key.clone())
}

pub fn gen_app_with_directory(
    directory: Arc<dyn PlaceDirectory>,
    auth_key: Option<String>,
) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        sidebar: SidebarService::new(directory),
        auth_key,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> &'static str {
    "Place search is ready!"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let google_server = mockito::Server::new_async().await;

    let app = gen_app(&Config {
        maps_api_key: "key".to_string(),
        maps_host: google_server.url(),
        auth_key: None,
        bind_addr: ([127, 0, 0, 1], 0).into(),
    });

    MockApp { app, google_server }
}
