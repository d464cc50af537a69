//! Axum route handlers for rendered pages and the page inspection API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::parse_flag;
use crate::errors::AppError;
use crate::page_service::PageRequest;
use crate::page_view::{resolve_page, PageViewState, FAILED_MESSAGE, NOT_FOUND_MESSAGE};
use crate::render::document::{page_document, status_document};
use crate::render::{render_sections, RenderedBlock};
use crate::sections::ContentIssue;
use crate::seo::SeoMetadata;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub preview: Option<String>,
    pub token: Option<String>,
}

impl PreviewQuery {
    fn into_request(self, slug: String) -> PageRequest {
        let preview = self.preview.as_deref().and_then(parse_flag).unwrap_or(false);
        PageRequest {
            slug,
            preview,
            token: self.token.filter(|_| preview),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageInspection {
    pub slug: String,
    pub seo: SeoMetadata,
    pub preview: bool,
    pub blocks: Vec<RenderedBlock>,
    pub issues: Vec<ContentIssue>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_home(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> (StatusCode, Html<String>) {
    let slug = state.config.home_slug.clone();
    render_page(&state, query.into_request(slug)).await
}

/// GET /:slug
pub async fn handle_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PreviewQuery>,
) -> (StatusCode, Html<String>) {
    render_page(&state, query.into_request(slug)).await
}

/// GET /api/v1/pages/:slug
///
/// Decodes and renders the page without returning markup. Used by the admin
/// tooling to check authored content before publishing.
pub async fn handle_inspect_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<PageInspection>, AppError> {
    let request = query.into_request(slug);
    let view = resolve_page(
        state.pages.as_ref(),
        &request,
        state.config.content_policy,
        &state.config.site_url,
    )
    .await
    .into_view()?;

    let blocks = render_sections(&view.sections, &state.render);
    let issues = view.issues().cloned().collect();

    Ok(Json(PageInspection {
        slug: view.page.slug,
        seo: view.seo,
        preview: view.preview_banner,
        blocks,
        issues,
    }))
}

async fn render_page(state: &AppState, request: PageRequest) -> (StatusCode, Html<String>) {
    let resolved = resolve_page(
        state.pages.as_ref(),
        &request,
        state.config.content_policy,
        &state.config.site_url,
    )
    .await;

    let (status, document) = match resolved {
        PageViewState::Ready(view) => {
            let blocks = render_sections(&view.sections, &state.render);
            debug!("Rendered '{}' with {} blocks", view.page.slug, blocks.len());
            (
                StatusCode::OK,
                page_document(&view.seo, &blocks, view.preview_banner),
            )
        }
        PageViewState::NotFound => (
            StatusCode::NOT_FOUND,
            status_document(
                NOT_FOUND_MESSAGE,
                "The page you are looking for does not exist or has been moved.",
            ),
        ),
        PageViewState::Rejected { issues } => {
            debug!("Rejected '{}' with {} content issues", request.slug, issues.len());
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                status_document(
                    FAILED_MESSAGE,
                    "This page has content that could not be displayed.",
                ),
            )
        }
        PageViewState::Failed { .. } | PageViewState::Loading => (
            StatusCode::BAD_GATEWAY,
            status_document(
                FAILED_MESSAGE,
                "Something went wrong while loading this page. Please try again later.",
            ),
        ),
    };

    match document {
        Ok(html) => (status, Html(html)),
        Err(e) => {
            error!("Template error for '{}': {}", request.slug, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Internal server error".to_string()),
            )
        }
    }
}
