pub mod page;

pub use page::{Page, PageEnvelope, PageSeo, PageStatus, Section};
