// File: usermgmt-server/src/context.rs

//! Defines the main "global" context (ServerContext) for the web server.

use std::sync::Arc;

use tracing::info;

use usermgmt_common::traits::{LogApi, UserApi};
use usermgmt_core::repositories::{LogRepository, UserRepository};
use usermgmt_core::services::{LogService, UserService};
use usermgmt_core::{Database, Error};

use crate::config::ServerConfig;

/// A bag of references to the services built over one shared store.
#[derive(Clone)]
pub struct ServerContext {
    pub user_service: Arc<dyn UserApi>,
    pub log_service: Arc<dyn LogApi>,
    pub config: ServerConfig,
}

impl ServerContext {
    pub async fn new(config: ServerConfig) -> Result<Self, Error> {
        let db = Database::new(config.store.clone());
        if config.seed {
            db.seed().await?;
        }
        info!("In-memory store ready (on user delete: {})", config.store.on_user_delete);

        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let log_repo = Arc::new(LogRepository::new(db.clone()));

        Ok(Self {
            user_service: Arc::new(UserService::new(user_repo)),
            log_service: Arc::new(LogService::new(log_repo)),
            config,
        })
    }
}
