//! Marketing site renderer.
//!
//! Fetches page documents from the page service, decodes their typed sections,
//! and renders them to HTML on the server.

pub mod config;
pub mod errors;
pub mod models;
pub mod page_service;
pub mod page_view;
pub mod render;
pub mod routes;
pub mod sections;
pub mod seo;
pub mod state;
