// File: usermgmt-core/src/repositories/mod.rs

use async_trait::async_trait;

use crate::Error;
use usermgmt_common::models::{Log, LogRelation, User, UserRelation};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn list_all(&self) -> Result<Vec<User>, Error>;
    async fn list_all_including(&self, relations: &[UserRelation]) -> Result<Vec<User>, Error>;
    async fn get(&self, id: i64) -> Result<Option<User>, Error>;
    /// Returns the stored row, including its newly assigned id.
    async fn create(&self, user: &User) -> Result<User, Error>;
    async fn update(&self, user: &User) -> Result<(), Error>;
    async fn delete(&self, id: i64) -> Result<(), Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogRepo: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Log>, Error>;
    async fn list_all_including(&self, relations: &[LogRelation]) -> Result<Vec<Log>, Error>;
    async fn get(&self, id: i64) -> Result<Option<Log>, Error>;
    async fn get_including(&self, id: i64, relations: &[LogRelation]) -> Result<Option<Log>, Error>;
    async fn create(&self, log: &Log) -> Result<Log, Error>;
    async fn update(&self, log: &Log) -> Result<(), Error>;
    async fn delete(&self, id: i64) -> Result<(), Error>;
}

pub use memory::user::UserRepository;
pub use memory::user_log::LogRepository;

pub mod memory;
