pub mod api;
pub mod document;
pub mod error;
pub mod record;
pub mod ui;
