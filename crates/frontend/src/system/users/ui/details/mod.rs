//! Profile editor
//!
//! - view_model.rs: form state, validation and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProfileEditor;
pub use view_model::{ProfileEditorViewModel, ProfileForm};
