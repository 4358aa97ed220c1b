// File: usermgmt-core/src/lib.rs

pub mod db;
pub mod repositories;
pub mod services;

pub use db::{Database, DeleteBehavior, StoreConfig};
pub use usermgmt_common::error::Error;
pub use usermgmt_common::models;
