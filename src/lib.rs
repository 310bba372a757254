pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod controllers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use services::normalizer::LayoutNormalizer;

// Shared state для всего приложения, передается в обработчики через State
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub normalizer: LayoutNormalizer,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let normalizer = LayoutNormalizer::new(config.layout.clone());
        Arc::new(Self { config, normalizer })
    }
}

/// Полный роутер приложения
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Seating Layout API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
