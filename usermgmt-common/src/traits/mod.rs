// File: usermgmt-common/src/traits/mod.rs

pub mod api;

pub use api::{LogApi, UserApi};
