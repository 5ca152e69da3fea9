//! Product details modal
//!
//! - view_model.rs: open/close/generate commands and their state
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
