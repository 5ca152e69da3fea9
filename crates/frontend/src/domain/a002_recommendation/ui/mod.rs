pub mod personal;
pub mod state;
