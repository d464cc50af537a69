use std::sync::Arc;

use crate::config::Config;
use crate::page_service::PageSource;
use crate::render::RenderConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page documents come from here. Default: HttpPageSource against PAGE_SERVICE_URL.
    pub pages: Arc<dyn PageSource>,
    pub render: RenderConfig,
}
