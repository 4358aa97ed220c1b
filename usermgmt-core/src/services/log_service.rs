// File: usermgmt-core/src/services/log_service.rs

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::repositories::LogRepo;
use crate::Error;
use usermgmt_common::models::{Log, LogRelation, User};
use usermgmt_common::traits::LogApi;

/// Appends and reads audit entries. Reads always resolve the owning user.
pub struct LogService {
    log_repo: Arc<dyn LogRepo>,
}

impl LogService {
    pub fn new(log_repo: Arc<dyn LogRepo>) -> Self {
        Self { log_repo }
    }
}

#[async_trait]
impl LogApi for LogService {
    async fn log_action(&self, user: &User, action: &str, details: Option<&str>) -> Result<Log, Error> {
        let entry = Log::new(user, action, details);
        let mut stored = self.log_repo.create(&entry).await?;
        debug!("Logged '{}' for user id={} (log id={})", action, user.id, stored.id);
        if stored.user_id.is_some() {
            stored.user = Some(Box::new(user.clone()));
        }
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Log>, Error> {
        self.log_repo.list_all_including(&[LogRelation::User]).await
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Log>, Error> {
        let logs = self.log_repo.list_all_including(&[LogRelation::User]).await?;
        Ok(logs.into_iter().filter(|l| l.user_id == Some(user_id)).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Log>, Error> {
        self.log_repo.get_including(id, &[LogRelation::User]).await
    }
}
