//! Paginated text documents and their PDF rendering
//!
//! - layout.rs: pure top-down layout with page breaks (testable without a browser)
//! - render.rs: turns a laid out document into PDF bytes

pub mod layout;
pub mod render;

pub use layout::{FontWeight, LayoutDocument, LayoutPage, PageGeometry, PageLayout, TextRun};
pub use render::render_pdf;
