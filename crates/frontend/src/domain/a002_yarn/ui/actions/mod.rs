//! Yarn Management page
//!
//! One selector dispatches among four yarn operations.
//!
//! - state.rs: selection, sub-forms and the shared result slot (pure)
//! - view_model.rs: signal wrapper and the action command
//! - view.rs: Leptos component

pub mod state;
mod view;
pub mod view_model;

pub use view::YarnActionsPage;
pub use view_model::YarnActionsViewModel;
