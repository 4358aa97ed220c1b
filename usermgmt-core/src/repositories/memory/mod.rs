// File: usermgmt-core/src/repositories/memory/mod.rs

pub mod user;
pub mod user_log;
