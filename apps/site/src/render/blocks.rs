//! Per-variant section layouts. Each function returns the inner markup of one block.

use crate::render::html::{escape, push_optional};
use crate::render::RenderConfig;
use crate::sections::content::{
    CtaContent, GalleryContent, GridContent, HeroContent, TestimonialContent, TextContent,
    TimelineContent,
};

pub fn hero(content: &HeroContent) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"hero\">\n");
    push_optional(&mut html, "h1", "hero-heading", content.heading.as_deref());
    push_optional(&mut html, "p", "hero-subheading", content.subheading.as_deref());
    if let Some(label) = &content.cta_text {
        let link = content.cta_link.as_deref().unwrap_or("#");
        html.push_str(&format!(
            "<a class=\"button hero-cta\" href=\"{}\">{}</a>\n",
            escape(link),
            escape(label)
        ));
    }
    html.push_str("</div>\n");
    html
}

pub fn text(content: &TextContent) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"text\">\n");
    push_optional(&mut html, "h2", "text-heading", content.heading.as_deref());
    if let Some(body) = &content.body {
        // Trusted rich text, emitted verbatim.
        html.push_str("<div class=\"prose\">");
        html.push_str(body);
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    html
}

pub fn cta(content: &CtaContent) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"cta\">\n");
    html.push_str("<div class=\"cta-backdrop\" aria-hidden=\"true\"></div>\n");
    push_optional(&mut html, "h2", "cta-heading", content.heading.as_deref());
    push_optional(&mut html, "p", "cta-description", content.description.as_deref());
    if let Some(label) = &content.button_text {
        let link = content.button_link.as_deref().unwrap_or("#");
        html.push_str(&format!(
            "<a class=\"button cta-button\" href=\"{}\">{}</a>\n",
            escape(link),
            escape(label)
        ));
    }
    html.push_str("</div>\n");
    html
}

pub fn testimonial(content: &TestimonialContent) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<figure class=\"testimonial card\">\n");
    push_optional(&mut html, "blockquote", "testimonial-quote", content.quote.as_deref());
    if content.author.is_some() || content.role.is_some() {
        html.push_str("<figcaption>\n");
        push_optional(&mut html, "span", "testimonial-author", content.author.as_deref());
        push_optional(&mut html, "span", "testimonial-role", content.role.as_deref());
        html.push_str("</figcaption>\n");
    }
    html.push_str("</figure>\n");
    html
}

/// Column hint 2 or 3 is honored; anything else falls back to the configured default.
pub fn grid_columns(hint: Option<u64>, config: &RenderConfig) -> u64 {
    match hint {
        Some(2) => 2,
        Some(3) => 3,
        _ => config.default_grid_columns,
    }
}

pub fn grid(content: &GridContent, config: &RenderConfig) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<div class=\"grid-section\">\n");
    push_optional(&mut html, "h2", "grid-heading", content.heading.as_deref());
    push_optional(&mut html, "p", "grid-subheading", content.subheading.as_deref());
    html.push_str(&format!(
        "<div class=\"grid grid-cols-{}\">\n",
        grid_columns(content.columns, config)
    ));
    for item in &content.items {
        html.push_str("<div class=\"grid-item card\">\n");
        push_optional(&mut html, "span", "grid-item-icon", item.icon.as_deref());
        push_optional(&mut html, "h3", "grid-item-title", item.title.as_deref());
        push_optional(&mut html, "p", "grid-item-description", item.description.as_deref());
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n");
    html
}

pub fn masonry_gallery(content: &GalleryContent, config: &RenderConfig) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<div class=\"gallery\">\n");
    push_optional(&mut html, "h2", "gallery-heading", content.heading.as_deref());
    html.push_str("<div class=\"masonry\">\n");
    for image in &content.images {
        let src = image.src.as_deref().unwrap_or(config.placeholder_image.as_str());
        let alt = image.alt.as_deref().unwrap_or(config.placeholder_alt.as_str());
        html.push_str(&format!(
            "<figure class=\"masonry-item\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></figure>\n",
            escape(src),
            escape(alt)
        ));
    }
    html.push_str("</div>\n</div>\n");
    html
}

/// Side an entry sits on: even indices left, odd indices right.
pub fn timeline_side(index: usize) -> &'static str {
    if index % 2 == 0 {
        "timeline-left"
    } else {
        "timeline-right"
    }
}

pub fn timeline(content: &TimelineContent) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<div class=\"timeline\">\n");
    push_optional(&mut html, "h2", "timeline-heading", content.heading.as_deref());
    html.push_str("<div class=\"timeline-track\">\n");
    html.push_str("<div class=\"timeline-line\" aria-hidden=\"true\"></div>\n");
    for (i, entry) in content.items.iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"timeline-entry {}\" data-entry=\"{}\">\n",
            timeline_side(i),
            i
        ));
        push_optional(&mut html, "time", "timeline-date", entry.date.as_deref());
        push_optional(&mut html, "h3", "timeline-title", entry.title.as_deref());
        push_optional(&mut html, "p", "timeline-description", entry.description.as_deref());
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n");
    html
}

pub fn unsupported(type_name: &str) -> String {
    let notice = if type_name.is_empty() {
        "Section without a type is not supported".to_string()
    } else {
        format!("Section type \"{}\" is not supported", escape(type_name))
    };
    format!("<div class=\"unsupported\">\n<p>{notice}</p>\n</div>\n")
}
