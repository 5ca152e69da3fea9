pub mod api;
pub mod context;
pub mod password;
pub mod storage;
pub mod wizard;
