// File: usermgmt-core/src/services/mod.rs

pub mod user_service;
pub mod log_service;

pub use user_service::UserService;
pub use log_service::LogService;
