// Section content model and boundary decoding.
// Raw `{type, content}` records are decoded once per request; the renderer only sees typed variants.

pub mod content;
pub mod decode;

pub use content::{SectionContent, SectionKind};
pub use decode::{decode_sections, ContentIssue, ContentPolicy, DecodedSection};
