// Section renderer: typed section content → HTML blocks.
// Pure functions only; animation timing comes from RenderConfig and the block index, never the clock.

pub mod blocks;
pub mod document;
pub mod html;

use serde::Serialize;

use crate::sections::{DecodedSection, SectionContent};

/// Theme and animation values the renderer needs, passed explicitly per call.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub base_delay_ms: u64,
    pub stagger_ms: u64,
    pub duration_ms: u64,
    pub placeholder_image: String,
    pub placeholder_alt: String,
    pub default_grid_columns: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 0,
            stagger_ms: 100,
            duration_ms: 500,
            placeholder_image: "/images/placeholder.svg".to_string(),
            placeholder_alt: "Gallery image".to_string(),
            default_grid_columns: 3,
        }
    }
}

impl RenderConfig {
    /// Staggered entry delay for the block at `index`. Saturates at `u64::MAX`.
    pub fn delay_for(&self, index: usize) -> u64 {
        let offset = u64::try_from(index)
            .unwrap_or(u64::MAX)
            .saturating_mul(self.stagger_ms);
        self.base_delay_ms.saturating_add(offset)
    }
}

/// One rendered section, ready to be concatenated into the page body.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedBlock {
    pub index: usize,
    pub kind: &'static str,
    pub delay_ms: u64,
    #[serde(skip)]
    pub html: String,
}

pub fn render_section(index: usize, content: &SectionContent, config: &RenderConfig) -> RenderedBlock {
    let inner = match content {
        SectionContent::Hero(c) => blocks::hero(c),
        SectionContent::Text(c) => blocks::text(c),
        SectionContent::Cta(c) => blocks::cta(c),
        SectionContent::Testimonial(c) => blocks::testimonial(c),
        SectionContent::Grid(c) => blocks::grid(c, config),
        SectionContent::MasonryGallery(c) => blocks::masonry_gallery(c, config),
        SectionContent::Timeline(c) => blocks::timeline(c),
        SectionContent::Unsupported { type_name } => blocks::unsupported(type_name),
    };

    let kind = content.kind_name();
    let delay_ms = config.delay_for(index);
    let html = format!(
        "<section class=\"block block-{kind}\" data-index=\"{index}\" style=\"animation-delay:{delay_ms}ms;animation-duration:{}ms\">\n{inner}</section>\n",
        config.duration_ms
    );

    RenderedBlock {
        index,
        kind,
        delay_ms,
        html,
    }
}

/// Renders every section in order; output length always equals input length.
pub fn render_sections(sections: &[DecodedSection], config: &RenderConfig) -> Vec<RenderedBlock> {
    sections
        .iter()
        .enumerate()
        .map(|(index, section)| render_section(index, &section.content, config))
        .collect()
}
