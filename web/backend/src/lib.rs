pub mod config;
pub mod handlers;
pub mod models;
pub mod pathfinding;
pub mod state;

use axum::{Router, routing::get};
use friendpath_core::SocialGraph;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn build_router<G: SocialGraph>(app_state: Arc<AppState<G>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/find", get(handlers::find_connection::<G>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
