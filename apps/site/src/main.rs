use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use site::config::Config;
use site::page_service::HttpPageSource;
use site::routes::build_router;
use site::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting site v{}", env!("CARGO_PKG_VERSION"));

    // Initialize page service client
    let pages = HttpPageSource::new(&config.page_service_url, config.page_service_timeout)?;
    info!(
        "Page service client initialized ({}, timeout {:?})",
        config.page_service_url, config.page_service_timeout
    );
    info!("Section content policy: {:?}", config.content_policy);
    info!("Serving static assets from '{}'", config.static_dir);

    let render = config.render_config();

    // Build app state
    let state = AppState {
        pages: Arc::new(pages),
        render,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
