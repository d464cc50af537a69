pub mod health;
pub mod pages;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);
    Router::new()
        .route("/health", get(health::health_handler))
        // Inspection API for the admin tooling
        .route("/api/v1/pages/:slug", get(pages::handle_inspect_page))
        // Rendered pages
        .route("/", get(pages::handle_home))
        .route("/:slug", get(pages::handle_page))
        // Stylesheet and images linked from rendered documents
        .nest_service("/static", assets)
        .with_state(state)
}
