// File: usermgmt-server/src/controllers/mod.rs

//! MVC-style controllers. Each controller is a plain struct over the
//! service traits; the axum handlers in the same module only extract
//! parameters and forward to it.

pub mod logs;
pub mod users;

use std::sync::Arc;

use crate::context::ServerContext;

pub use logs::LogsController;
pub use users::UsersController;

/// Router state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UsersController>,
    pub logs: Arc<LogsController>,
}

impl AppState {
    pub fn new(ctx: &ServerContext) -> Self {
        Self {
            users: Arc::new(UsersController::new(
                ctx.user_service.clone(),
                ctx.log_service.clone(),
            )),
            logs: Arc::new(LogsController::new(
                ctx.log_service.clone(),
                ctx.config.default_page_size,
            )),
        }
    }
}
