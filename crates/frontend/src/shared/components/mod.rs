pub mod form_message;
pub mod pagination_controls;
