mod dashboard;
mod profile_summary;
mod user_menu;

pub use dashboard::Dashboard;
