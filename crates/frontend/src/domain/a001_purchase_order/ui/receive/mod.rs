//! Receive New Order form
//!
//! - form.rs: editable form state and its transitions (pure)
//! - view_model.rs: signals and the submit command
//! - view.rs: Leptos component

pub mod form;
mod view;
pub mod view_model;

pub use view::ReceiveOrderForm;
pub use view_model::ReceiveOrderViewModel;
