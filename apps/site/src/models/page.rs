use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Publication state of a page as reported by the page service.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
}

impl<'de> Deserialize<'de> for PageStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("published") => PageStatus::Published,
            _ => PageStatus::Draft,
        })
    }
}

/// Renders any scalar JSON value as text; `null` becomes an empty string.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accepts a string or a number (ids come back numeric from some backends).
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_to_text(&Value::deserialize(deserializer)?))
}

/// One raw section record: a type tag plus a payload whose shape depends on it.
///
/// Deserialization never fails: a missing or non-string `type` becomes an
/// empty or stringified tag, which later decodes to an unsupported section.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Section {
    #[serde(rename = "type")]
    pub section_type: String,
    pub content: Value,
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Object(mut record) => Section {
                section_type: record.get("type").map(value_to_text).unwrap_or_default(),
                content: record.remove("content").unwrap_or(Value::Null),
            },
            other => Section {
                section_type: String::new(),
                content: other,
            },
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageSeo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default, alias = "og_image")]
    pub og_image: Option<String>,
    #[serde(default, alias = "canonical_url")]
    pub canonical_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub status: PageStatus,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub seo: Option<PageSeo>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The page service answers either with a list wrapper or a bare page.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageEnvelope {
    List { items: Vec<Page> },
    Single(Box<Page>),
}

impl PageEnvelope {
    /// The resolved page, if any. Only the first list item is used.
    pub fn into_page(self) -> Option<Page> {
        match self {
            PageEnvelope::List { items } => items.into_iter().next(),
            PageEnvelope::Single(page) => Some(*page),
        }
    }
}
