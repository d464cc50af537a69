//! Full HTML documents: resolved pages and the terminal not-found / failed states.

use askama::Template;

use crate::render::RenderedBlock;
use crate::seo::SeoMetadata;

pub const STYLESHEET: &str = "/static/site.css";

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    stylesheet: &'a str,
    seo: &'a SeoMetadata,
    blocks: &'a [RenderedBlock],
    preview_banner: bool,
}

#[derive(Template)]
#[template(path = "status.html")]
struct StatusTemplate<'a> {
    title: &'a str,
    stylesheet: &'a str,
    message: &'a str,
}

/// Renders a resolved page. The preview banner sits above every block when requested.
///
/// Block markup is inserted as-is; every SEO value is escaped by the template.
pub fn page_document(
    seo: &SeoMetadata,
    blocks: &[RenderedBlock],
    preview_banner: bool,
) -> Result<String, askama::Error> {
    PageTemplate {
        title: &seo.title,
        stylesheet: STYLESHEET,
        seo,
        blocks,
        preview_banner,
    }
    .render()
}

/// Renders a terminal error state with a single "return home" action.
pub fn status_document(title: &str, message: &str) -> Result<String, askama::Error> {
    StatusTemplate {
        title,
        stylesheet: STYLESHEET,
        message,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seo() -> SeoMetadata {
        SeoMetadata {
            title: "Pricing & Plans".to_string(),
            description: "Simple pricing".to_string(),
            keywords: String::new(),
            og_image: None,
            canonical_url: "https://hirely.io/pricing".to_string(),
        }
    }

    fn block(index: usize, html: &str) -> RenderedBlock {
        RenderedBlock {
            index,
            kind: "text",
            delay_ms: 0,
            html: html.to_string(),
        }
    }

    #[test]
    fn test_page_document_concatenates_blocks_in_order() {
        let html = page_document(
            &seo(),
            &[block(0, "<p>first</p>"), block(1, "<p>second</p>")],
            false,
        )
        .unwrap();
        let first = html.find("<p>first</p>").unwrap();
        let second = html.find("<p>second</p>").unwrap();
        assert!(first < second);
        assert!(html.contains("<title>Pricing &amp; Plans</title>"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://hirely.io/pricing\">"));
        assert!(!html.contains("name=\"keywords\""));
        assert!(!html.contains("og:image"));
        assert!(!html.contains("preview-banner"));
    }

    #[test]
    fn test_page_document_with_preview_banner() {
        let html = page_document(&seo(), &[], true).unwrap();
        assert!(html.contains("preview-banner"));
    }

    #[test]
    fn test_status_document_has_home_action() {
        let html =
            status_document("Page not found", "The page you are looking for does not exist.")
                .unwrap();
        assert!(html.contains("<h1>Page not found</h1>"));
        assert!(html.contains("href=\"/\">Return home</a>"));
    }

    #[test]
    fn test_seo_values_are_escaped_in_attributes() {
        let mut seo = seo();
        seo.description = "Plans \"for\" <teams>".to_string();
        seo.og_image = Some("/og.png?a=1&b=2".to_string());
        let html = page_document(&seo, &[], false).unwrap();
        assert!(html.contains("content=\"Plans &quot;for&quot; &lt;teams&gt;\""));
        assert!(html.contains("<meta property=\"og:image\" content=\"/og.png?a=1&amp;b=2\">"));
        assert!(!html.contains("<teams>"));
    }

    #[test]
    fn test_status_document_escapes_message() {
        let html = status_document("Failed to load page", "<script>x</script>").unwrap();
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains(&format!("href=\"{STYLESHEET}\"")));
    }
}
