use askama_escape::{escape as escape_html, Html};

/// Escapes text for use inside element content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    escape_html(text, Html).to_string()
}

/// Pushes `<tag class="..">text</tag>` when `text` is present; nothing otherwise.
pub fn push_optional(html: &mut String, tag: &str, class: &str, text: Option<&str>) {
    if let Some(text) = text {
        html.push_str(&format!(
            "<{tag} class=\"{class}\">{}</{tag}>\n",
            escape_html(text, Html)
        ));
    }
}
