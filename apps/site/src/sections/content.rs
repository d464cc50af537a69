use serde::Serialize;

/// Section kinds the renderer knows how to lay out.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Text,
    Cta,
    Testimonial,
    Grid,
    MasonryGallery,
    Timeline,
}

impl SectionKind {
    /// Parses the wire type tag. Case-insensitive, `-` and `_` are equivalent.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_uppercase().replace('-', "_");
        match normalized.as_str() {
            "HERO" => Some(SectionKind::Hero),
            "TEXT" => Some(SectionKind::Text),
            "CTA" => Some(SectionKind::Cta),
            "TESTIMONIAL" => Some(SectionKind::Testimonial),
            "GRID" => Some(SectionKind::Grid),
            "MASONRY_GALLERY" => Some(SectionKind::MasonryGallery),
            "TIMELINE" => Some(SectionKind::Timeline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Text => "text",
            SectionKind::Cta => "cta",
            SectionKind::Testimonial => "testimonial",
            SectionKind::Grid => "grid",
            SectionKind::MasonryGallery => "masonry-gallery",
            SectionKind::Timeline => "timeline",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct HeroContent {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TextContent {
    pub heading: Option<String>,
    /// Pre-sanitized rich text from the trusted content source.
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CtaContent {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TestimonialContent {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct GridItem {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct GridContent {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub columns: Option<u64>,
    pub items: Vec<GridItem>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct GalleryImage {
    pub src: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct GalleryContent {
    pub heading: Option<String>,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TimelineEntry {
    pub date: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TimelineContent {
    pub heading: Option<String>,
    pub items: Vec<TimelineEntry>,
}

/// Typed section payload. Every field is optional; absent fields render nothing.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionContent {
    Hero(HeroContent),
    Text(TextContent),
    Cta(CtaContent),
    Testimonial(TestimonialContent),
    Grid(GridContent),
    MasonryGallery(GalleryContent),
    Timeline(TimelineContent),
    Unsupported { type_name: String },
}

impl SectionContent {
    /// CSS-friendly name used for block classes and inspection output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SectionContent::Hero(_) => SectionKind::Hero.as_str(),
            SectionContent::Text(_) => SectionKind::Text.as_str(),
            SectionContent::Cta(_) => SectionKind::Cta.as_str(),
            SectionContent::Testimonial(_) => SectionKind::Testimonial.as_str(),
            SectionContent::Grid(_) => SectionKind::Grid.as_str(),
            SectionContent::MasonryGallery(_) => SectionKind::MasonryGallery.as_str(),
            SectionContent::Timeline(_) => SectionKind::Timeline.as_str(),
            SectionContent::Unsupported { .. } => "unsupported",
        }
    }
}
