use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::SiteProfile;
use crate::routes::Route;
use crate::search_client::SearchClient;

pub mod handlers;
pub mod models;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn SearchClient>,
    pub profile: Arc<SiteProfile>,
}

impl AppState {
    pub fn new(search: Arc<dyn SearchClient>, profile: SiteProfile) -> Self {
        Self {
            search,
            profile: Arc::new(profile),
        }
    }
}

pub fn create_router(state: AppState, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route(Route::Home.path(), get(handlers::home_handler))
        .route(
            Route::Search.path(),
            get(handlers::search_handler).post(handlers::submit_handler),
        )
        .route(Route::Resume.path(), get(handlers::resume_handler))
        .route("/health", get(handlers::health_handler))
        .with_state(state)
        // resume.pdf, styles.css
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
