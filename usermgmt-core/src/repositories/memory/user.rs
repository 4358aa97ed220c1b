// File: usermgmt-core/src/repositories/memory/user.rs

use async_trait::async_trait;
use tracing::{debug, info};

use crate::db::{Database, DeleteBehavior};
use crate::repositories::UserRepo;
use crate::Error;
use usermgmt_common::models::{User, UserRelation};

#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepo for UserRepository {
    async fn list_all(&self) -> Result<Vec<User>, Error> {
        self.list_all_including(&[]).await
    }

    async fn list_all_including(&self, relations: &[UserRelation]) -> Result<Vec<User>, Error> {
        let tables = self.db.read().await;
        let mut users: Vec<User> = tables.users.rows().cloned().collect();

        if relations.contains(&UserRelation::Logs) {
            for user in users.iter_mut() {
                user.logs = tables
                    .logs
                    .rows()
                    .filter(|log| log.user_id == Some(user.id))
                    .cloned()
                    .collect();
            }
        }
        Ok(users)
    }

    async fn get(&self, id: i64) -> Result<Option<User>, Error> {
        Ok(self.db.read().await.users.get(id).cloned())
    }

    async fn create(&self, user: &User) -> Result<User, Error> {
        let stored = self.db.write().await.users.insert(user)?;
        debug!("Inserted user id={} email={}", stored.id, stored.email);
        Ok(stored)
    }

    async fn update(&self, user: &User) -> Result<(), Error> {
        self.db.write().await.users.replace(user)
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        let mut tables = self.db.write().await;
        tables.users.remove(id)?;

        match self.db.config().on_user_delete {
            DeleteBehavior::NoAction => {}
            DeleteBehavior::SetNull => {
                for log in tables.logs.rows_mut().filter(|log| log.user_id == Some(id)) {
                    log.user_id = None;
                }
            }
            DeleteBehavior::Cascade => {
                let before = tables.logs.len();
                tables.logs.retain(|log| log.user_id != Some(id));
                info!("Cascade removed {} log(s) for user id={}", before - tables.logs.len(), id);
            }
        }
        Ok(())
    }
}
