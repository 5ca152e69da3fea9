pub mod allergies;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod request_seq;
pub mod storage;
pub mod theme;
pub mod toast;
