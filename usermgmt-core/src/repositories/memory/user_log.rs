// File: usermgmt-core/src/repositories/memory/user_log.rs

use async_trait::async_trait;

use crate::db::{Database, DeleteBehavior, Tables};
use crate::repositories::LogRepo;
use crate::Error;
use usermgmt_common::models::{Log, LogRelation};

#[derive(Clone)]
pub struct LogRepository {
    db: Database,
}

impl LogRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn resolve(tables: &Tables, mut log: Log, relations: &[LogRelation]) -> Log {
    if relations.contains(&LogRelation::User) {
        log.user = log
            .user_id
            .and_then(|id| tables.users.get(id))
            .cloned()
            .map(Box::new);
    }
    log
}

#[async_trait]
impl LogRepo for LogRepository {
    async fn list_all(&self) -> Result<Vec<Log>, Error> {
        self.list_all_including(&[]).await
    }

    async fn list_all_including(&self, relations: &[LogRelation]) -> Result<Vec<Log>, Error> {
        let tables = self.db.read().await;
        Ok(tables
            .logs
            .rows()
            .cloned()
            .map(|log| resolve(&tables, log, relations))
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Log>, Error> {
        self.get_including(id, &[]).await
    }

    async fn get_including(&self, id: i64, relations: &[LogRelation]) -> Result<Option<Log>, Error> {
        let tables = self.db.read().await;
        Ok(tables
            .logs
            .get(id)
            .cloned()
            .map(|log| resolve(&tables, log, relations)))
    }

    async fn create(&self, log: &Log) -> Result<Log, Error> {
        let mut tables = self.db.write().await;

        // Under set-null no entry may point at a user that is gone, including
        // entries written after the delete.
        let owner_gone = log.user_id.is_some_and(|id| tables.users.get(id).is_none());
        if owner_gone && self.db.config().on_user_delete == DeleteBehavior::SetNull {
            let mut orphan = log.clone();
            orphan.user_id = None;
            return tables.logs.insert(&orphan);
        }
        tables.logs.insert(log)
    }

    async fn update(&self, log: &Log) -> Result<(), Error> {
        self.db.write().await.logs.replace(log)
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        self.db.write().await.logs.remove(id).map(|_| ())
    }
}
