//! Download Purchase Order as PDF
//!
//! - model.rs: fetch + PDF build
//! - view_model.rs: signals and the download command
//! - view.rs: Leptos component

pub mod model;
mod view;
pub mod view_model;

pub use view::DownloadOrderCard;
pub use view_model::DownloadOrderViewModel;
