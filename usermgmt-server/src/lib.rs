// File: usermgmt-server/src/lib.rs

//! Web layer: configuration, context wiring, controllers and the axum router.

pub mod config;
pub mod context;
pub mod controllers;
pub mod models;
pub mod result;
pub mod server;

pub use config::{Args, ServerConfig};
pub use context::ServerContext;
pub use server::{build_router, run_server};
