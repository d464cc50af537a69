use serde::Serialize;

use crate::models::Page;

/// Metadata emitted into the document head for a resolved page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: Option<String>,
    pub canonical_url: String,
}

impl SeoMetadata {
    /// Page title and an empty description stand in when the SEO block omits them.
    pub fn from_page(page: &Page, site_url: &str) -> Self {
        let seo = page.seo.clone().unwrap_or_default();
        Self {
            title: seo.title.unwrap_or_else(|| page.title.clone()),
            description: seo.description.unwrap_or_default(),
            keywords: seo.keywords.unwrap_or_default(),
            og_image: seo.og_image,
            canonical_url: seo
                .canonical_url
                .unwrap_or_else(|| format!("{}/{}", site_url.trim_end_matches('/'), page.slug)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PageSeo, PageStatus};

    fn page(seo: Option<PageSeo>) -> Page {
        Page {
            id: "pg_1".to_string(),
            title: "Case Studies".to_string(),
            slug: "case-studies".to_string(),
            status: PageStatus::Published,
            sections: vec![],
            seo,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_fallbacks_without_seo_block() {
        let meta = SeoMetadata::from_page(&page(None), "https://hirely.io/");
        assert_eq!(meta.title, "Case Studies");
        assert_eq!(meta.description, "");
        assert_eq!(meta.keywords, "");
        assert_eq!(meta.og_image, None);
        assert_eq!(meta.canonical_url, "https://hirely.io/case-studies");
    }

    #[test]
    fn test_seo_block_overrides() {
        let meta = SeoMetadata::from_page(
            &page(Some(PageSeo {
                title: Some("Customer stories".to_string()),
                description: Some("How teams hire".to_string()),
                keywords: Some("hiring, ats".to_string()),
                og_image: Some("/og/cases.png".to_string()),
                canonical_url: Some("https://hirely.io/customers".to_string()),
            })),
            "https://hirely.io",
        );
        assert_eq!(meta.title, "Customer stories");
        assert_eq!(meta.description, "How teams hire");
        assert_eq!(meta.keywords, "hiring, ats");
        assert_eq!(meta.og_image.as_deref(), Some("/og/cases.png"));
        assert_eq!(meta.canonical_url, "https://hirely.io/customers");
    }

    #[test]
    fn test_partial_seo_block_falls_back_per_field() {
        let meta = SeoMetadata::from_page(
            &page(Some(PageSeo {
                description: Some("Only a description".to_string()),
                ..Default::default()
            })),
            "https://hirely.io",
        );
        assert_eq!(meta.title, "Case Studies");
        assert_eq!(meta.description, "Only a description");
    }
}
