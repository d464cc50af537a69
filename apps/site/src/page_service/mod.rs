/// Page Service client — the single point of entry for fetching page documents.
///
/// Handlers never talk to the page service directly; they go through the
/// `PageSource` trait so tests can swap in an in-memory source.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Page, PageEnvelope};

const PAGES_PATH: &str = "/api/pages";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid slug: '{0}'")]
    InvalidSlug(String),

    #[error("Page not found")]
    NotFound,

    #[error("Page service returned status {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not decode page document: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound | FetchError::InvalidSlug(_))
    }
}

/// What to fetch: a slug, optionally in preview mode with an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub slug: String,
    pub preview: bool,
    pub token: Option<String>,
}

impl PageRequest {
    pub fn published(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            preview: false,
            token: None,
        }
    }

    pub fn preview(slug: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            preview: true,
            token: Some(token.into()),
        }
    }

    /// Preview counts only when a non-empty token accompanies the flag.
    pub fn is_preview(&self) -> bool {
        self.preview && self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("slug", self.slug.clone())];
        if self.preview {
            query.push(("preview", "true".to_string()));
            if let Some(token) = &self.token {
                query.push(("token", token.clone()));
            }
        }
        query
    }
}

/// URL-safe slugs: lowercase ascii letters, digits and inner hyphens.
pub fn validate_slug(slug: &str) -> Result<(), FetchError> {
    let valid = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(FetchError::InvalidSlug(slug.to_string()))
    }
}

/// Source of page documents. Carried in `AppState` as `Arc<dyn PageSource>`.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, FetchError>;
}

/// Fetches pages from the external page service over HTTP.
#[derive(Clone)]
pub struct HttpPageSource {
    client: Client,
    base_url: String,
}

impl HttpPageSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, FetchError> {
        validate_slug(&request.slug)?;

        let url = format!("{}{}", self.base_url, PAGES_PATH);
        let response = self
            .client
            .get(&url)
            .query(&request.query())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Page service has no page for slug '{}'", request.slug);
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            warn!(
                "Page service returned {} for slug '{}'",
                status, request.slug
            );
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: PageEnvelope =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        let page = envelope.into_page().ok_or(FetchError::NotFound)?;
        debug!(
            "Fetched page '{}' ({} sections, status {:?})",
            page.slug,
            page.sections.len(),
            page.status
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::StatusCode as AxumStatus,
        response::{IntoResponse, Response},
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    async fn fake_pages(Query(params): Query<HashMap<String, String>>) -> Response {
        let slug = params.get("slug").cloned().unwrap_or_default();
        match slug.as_str() {
            "about" => Json(json!({
                "items": [{"id": "1", "title": "About", "slug": "about", "status": "PUBLISHED", "sections": []}]
            }))
            .into_response(),
            "bare" => Json(json!({"id": "2", "title": "Bare", "slug": "bare"})).into_response(),
            "empty" => Json(json!({"items": []})).into_response(),
            "broken" => (AxumStatus::OK, "not json").into_response(),
            "boom" => AxumStatus::INTERNAL_SERVER_ERROR.into_response(),
            "draft" => {
                if params.get("preview").map(String::as_str) == Some("true")
                    && params.get("token").map(String::as_str) == Some("secret")
                {
                    Json(json!({"id": "3", "title": "Draft", "slug": "draft", "status": "DRAFT"}))
                        .into_response()
                } else {
                    AxumStatus::NOT_FOUND.into_response()
                }
            }
            _ => AxumStatus::NOT_FOUND.into_response(),
        }
    }

    async fn spawn_fake_service() -> String {
        let app = Router::new().route(PAGES_PATH, get(fake_pages));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn source() -> HttpPageSource {
        HttpPageSource::new(spawn_fake_service().await, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("pricing").is_ok());
        assert!(validate_slug("case-studies-2024").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("-lead").is_err());
        assert!(validate_slug("Pricing").is_err());
        assert!(validate_slug("a/b").is_err());
    }

    #[test]
    fn test_preview_requires_token() {
        let mut request = PageRequest::preview("draft", "secret");
        assert!(request.is_preview());
        request.token = Some(String::new());
        assert!(!request.is_preview());
        assert!(!PageRequest::published("draft").is_preview());
    }

    #[tokio::test]
    async fn test_fetch_items_envelope() {
        let page = source()
            .await
            .fetch_page(&PageRequest::published("about"))
            .await
            .unwrap();
        assert_eq!(page.title, "About");
    }

    #[tokio::test]
    async fn test_fetch_bare_page() {
        let page = source()
            .await
            .fetch_page(&PageRequest::published("bare"))
            .await
            .unwrap();
        assert_eq!(page.slug, "bare");
    }

    #[tokio::test]
    async fn test_404_maps_to_not_found() {
        let err = source()
            .await
            .fetch_page(&PageRequest::published("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::NotFound));
    }

    #[tokio::test]
    async fn test_empty_items_maps_to_not_found() {
        let err = source()
            .await
            .fetch_page(&PageRequest::published("empty"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let err = source()
            .await
            .fetch_page(&PageRequest::published("boom"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_decode() {
        let err = source()
            .await
            .fetch_page(&PageRequest::published("broken"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_preview_params_are_forwarded() {
        let source = source().await;
        assert!(source
            .fetch_page(&PageRequest::published("draft"))
            .await
            .is_err());
        let page = source
            .fetch_page(&PageRequest::preview("draft", "secret"))
            .await
            .unwrap();
        assert_eq!(page.title, "Draft");
    }

    #[tokio::test]
    async fn test_invalid_slug_skips_request() {
        let source = HttpPageSource::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let err = source
            .fetch_page(&PageRequest::published("../etc"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidSlug(_)));
    }
}
