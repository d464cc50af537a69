//! Page-view orchestration — fetch a page, decode it, and settle on one terminal state.
//!
//! `resolve_page` is stateless and used per HTTP request. `PageLoader` keeps the
//! latest state across navigations and drops responses that arrive after a newer
//! navigation has started.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::Page;
use crate::page_service::{FetchError, PageRequest, PageSource};
use crate::sections::{decode_sections, ContentIssue, ContentPolicy, DecodedSection};
use crate::seo::SeoMetadata;

pub const NOT_FOUND_MESSAGE: &str = "Page not found";
pub const FAILED_MESSAGE: &str = "Failed to load page";

/// A fetched page with its sections decoded and SEO metadata derived.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub page: Page,
    #[serde(skip)]
    pub sections: Vec<DecodedSection>,
    pub seo: SeoMetadata,
    pub preview_banner: bool,
}

impl PageView {
    pub fn issues(&self) -> impl Iterator<Item = &ContentIssue> {
        self.sections.iter().flat_map(|s| s.issues.iter())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageViewState {
    Loading,
    NotFound,
    Failed { message: String },
    Rejected { issues: Vec<ContentIssue> },
    Ready(Box<PageView>),
}

impl PageViewState {
    pub fn message(&self) -> Option<&str> {
        match self {
            PageViewState::NotFound => Some(NOT_FOUND_MESSAGE),
            PageViewState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Collapses a terminal state into the resolved view or the matching API error.
    pub fn into_view(self) -> Result<PageView, AppError> {
        match self {
            PageViewState::Ready(view) => Ok(*view),
            PageViewState::NotFound => Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string())),
            PageViewState::Failed { message } => Err(AppError::PageService(message)),
            PageViewState::Rejected { issues } => Err(AppError::Unprocessable(issues)),
            PageViewState::Loading => Err(AppError::Internal(anyhow!("page view is still loading"))),
        }
    }
}

/// Fetches and decodes one page. Never returns `Loading`.
pub async fn resolve_page(
    source: &dyn PageSource,
    request: &PageRequest,
    policy: ContentPolicy,
    site_url: &str,
) -> PageViewState {
    let page = match source.fetch_page(request).await {
        Ok(page) => page,
        Err(e) if e.is_not_found() => {
            info!("Page '{}' not found", request.slug);
            return PageViewState::NotFound;
        }
        Err(e) => {
            warn!("Failed to load page '{}': {e}", request.slug);
            return PageViewState::Failed {
                message: FAILED_MESSAGE.to_string(),
            };
        }
    };

    let sections = decode_sections(&page.sections);
    let issues: Vec<ContentIssue> = sections
        .iter()
        .flat_map(|s| s.issues.iter().cloned())
        .collect();

    if !issues.is_empty() {
        for issue in &issues {
            warn!(
                "Page '{}' section {} field '{}': {:?}",
                page.slug, issue.section_index, issue.field, issue.problem
            );
        }
        if policy == ContentPolicy::Strict {
            return PageViewState::Rejected { issues };
        }
    }

    let seo = SeoMetadata::from_page(&page, site_url);
    PageViewState::Ready(Box::new(PageView {
        preview_banner: request.is_preview(),
        page,
        sections,
        seo,
    }))
}

/// Keeps the state of the most recent navigation.
///
/// Each `navigate` call takes a new generation number; a result is committed
/// only if its generation is still the latest when the fetch completes.
pub struct PageLoader {
    source: Arc<dyn PageSource>,
    policy: ContentPolicy,
    site_url: String,
    generation: AtomicU64,
    state: RwLock<PageViewState>,
}

impl PageLoader {
    pub fn new(source: Arc<dyn PageSource>, policy: ContentPolicy, site_url: String) -> Self {
        Self {
            source,
            policy,
            site_url,
            generation: AtomicU64::new(0),
            state: RwLock::new(PageViewState::Loading),
        }
    }

    pub async fn state(&self) -> PageViewState {
        self.state.read().await.clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Loads `request`. Returns false when a newer navigation superseded this one.
    pub async fn navigate(&self, request: PageRequest) -> bool {
        // Taking the ticket and marking Loading happen under one write lock, so an
        // older navigation can never overwrite a newer committed result.
        let ticket = {
            let mut state = self.state.write().await;
            let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = PageViewState::Loading;
            ticket
        };

        let resolved = resolve_page(self.source.as_ref(), &request, self.policy, &self.site_url).await;

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            info!(
                "Dropping stale response for '{}' (generation {ticket})",
                request.slug
            );
            return false;
        }
        *state = resolved;
        true
    }
}
