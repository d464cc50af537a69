//! Section decoding — turns raw `{type, content}` records into typed variants.
//!
//! Decoding never fails. Absent fields become `None`; fields of the wrong
//! JSON type also become `None` but are recorded as a `ContentIssue` so the
//! caller can log them or, under `ContentPolicy::Strict`, reject the page.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::Section;
use crate::sections::content::{
    CtaContent, GalleryContent, GalleryImage, GridContent, GridItem, HeroContent, SectionContent,
    SectionKind, TestimonialContent, TextContent, TimelineContent, TimelineEntry,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum ContentProblem {
    WrongType { expected: &'static str },
    NotAnObject,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentIssue {
    pub section_index: usize,
    pub field: String,
    #[serde(flatten)]
    pub problem: ContentProblem,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DecodedSection {
    pub content: SectionContent,
    pub issues: Vec<ContentIssue>,
}

/// How the page boundary treats malformed section content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentPolicy {
    /// Malformed fields are dropped and the page still renders.
    #[default]
    Lenient,
    /// Any malformed field rejects the whole page.
    Strict,
}

/// Reads optional fields out of a JSON object, collecting type mismatches.
struct FieldReader<'a> {
    object: Option<&'a Map<String, Value>>,
    section_index: usize,
    prefix: String,
    issues: &'a mut Vec<ContentIssue>,
}

impl<'a> FieldReader<'a> {
    fn new(
        value: &'a Value,
        section_index: usize,
        prefix: String,
        issues: &'a mut Vec<ContentIssue>,
    ) -> Self {
        let object = match value {
            Value::Object(map) => Some(map),
            Value::Null => None,
            _ => {
                issues.push(ContentIssue {
                    section_index,
                    field: if prefix.is_empty() {
                        "content".to_string()
                    } else {
                        prefix.clone()
                    },
                    problem: ContentProblem::NotAnObject,
                });
                None
            }
        };
        Self {
            object,
            section_index,
            prefix,
            issues,
        }
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    fn wrong_type(&mut self, key: &str, expected: &'static str) {
        let field = self.path(key);
        self.issues.push(ContentIssue {
            section_index: self.section_index,
            field,
            problem: ContentProblem::WrongType { expected },
        });
    }

    /// First present value among `keys` (camelCase first, snake_case aliases after).
    fn lookup(&self, keys: &[&'static str]) -> Option<(&'static str, &'a Value)> {
        let object = self.object?;
        keys.iter()
            .find_map(|key| object.get(*key).map(|v| (*key, v)))
            .filter(|(_, v)| !v.is_null())
    }

    fn text(&mut self, keys: &[&'static str]) -> Option<String> {
        let (key, value) = self.lookup(keys)?;
        match value {
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => {
                self.wrong_type(key, "string");
                None
            }
        }
    }

    fn count(&mut self, keys: &[&'static str]) -> Option<u64> {
        let (key, value) = self.lookup(keys)?;
        let parsed = match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        if parsed.is_none() {
            self.wrong_type(key, "positive integer");
        }
        parsed
    }

    /// Decodes every element of an array field with `decode_item`.
    /// Non-object elements still produce an (empty) item so counts are preserved.
    fn list<T, F>(&mut self, keys: &[&'static str], mut decode_item: F) -> Vec<T>
    where
        F: FnMut(&mut FieldReader<'_>) -> T,
    {
        let Some((key, value)) = self.lookup(keys) else {
            return Vec::new();
        };
        let Value::Array(elements) = value else {
            self.wrong_type(key, "array");
            return Vec::new();
        };
        let base = self.path(key);
        elements
            .iter()
            .enumerate()
            .map(|(i, element)| {
                let mut reader = FieldReader::new(
                    element,
                    self.section_index,
                    format!("{base}[{i}]"),
                    self.issues,
                );
                decode_item(&mut reader)
            })
            .collect()
    }
}

/// Decodes one raw section at position `index` of its page.
pub fn decode_section(index: usize, section: &Section) -> DecodedSection {
    let mut issues = Vec::new();

    let Some(kind) = SectionKind::parse(&section.section_type) else {
        return DecodedSection {
            content: SectionContent::Unsupported {
                type_name: section.section_type.clone(),
            },
            issues,
        };
    };

    let mut r = FieldReader::new(&section.content, index, String::new(), &mut issues);

    let content = match kind {
        SectionKind::Hero => SectionContent::Hero(HeroContent {
            heading: r.text(&["heading", "title"]),
            subheading: r.text(&["subheading", "subHeading", "sub_heading"]),
            cta_text: r.text(&["ctaText", "cta_text"]),
            cta_link: r.text(&["ctaLink", "cta_link"]),
        }),
        SectionKind::Text => SectionContent::Text(TextContent {
            heading: r.text(&["heading", "title"]),
            body: r.text(&["body", "content"]),
        }),
        SectionKind::Cta => SectionContent::Cta(CtaContent {
            heading: r.text(&["heading", "title"]),
            description: r.text(&["description"]),
            button_text: r.text(&["buttonText", "button_text"]),
            button_link: r.text(&["buttonLink", "button_link"]),
        }),
        SectionKind::Testimonial => SectionContent::Testimonial(TestimonialContent {
            quote: r.text(&["quote"]),
            author: r.text(&["author"]),
            role: r.text(&["role"]),
        }),
        SectionKind::Grid => SectionContent::Grid(GridContent {
            heading: r.text(&["heading", "title"]),
            subheading: r.text(&["subheading", "subHeading", "sub_heading"]),
            columns: r.count(&["columns"]),
            items: r.list(&["items"], |item| GridItem {
                icon: item.text(&["icon"]),
                title: item.text(&["title"]),
                description: item.text(&["description"]),
            }),
        }),
        SectionKind::MasonryGallery => SectionContent::MasonryGallery(GalleryContent {
            heading: r.text(&["heading", "title"]),
            images: r.list(&["images"], |image| GalleryImage {
                src: image.text(&["src", "url"]),
                alt: image.text(&["alt"]),
            }),
        }),
        SectionKind::Timeline => SectionContent::Timeline(TimelineContent {
            heading: r.text(&["heading", "title"]),
            items: r.list(&["items"], |entry| TimelineEntry {
                date: entry.text(&["date"]),
                title: entry.text(&["title"]),
                description: entry.text(&["description"]),
            }),
        }),
    };

    DecodedSection { content, issues }
}

/// Decodes a page's sections, preserving order and count.
pub fn decode_sections(sections: &[Section]) -> Vec<DecodedSection> {
    sections
        .iter()
        .enumerate()
        .map(|(index, section)| decode_section(index, section))
        .collect()
}
