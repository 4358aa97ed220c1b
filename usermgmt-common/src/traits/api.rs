// File: usermgmt-common/src/traits/api.rs

//
// Service-facing traits. The web layer only ever talks to these, so the
// services behind them can be swapped for test doubles.

use async_trait::async_trait;

use crate::error::Error;
use crate::models::{Log, User};

#[async_trait]
pub trait UserApi: Send + Sync {
    /// All users, ascending by id.
    async fn list_all(&self) -> Result<Vec<User>, Error>;
    async fn filter_by_active(&self, is_active: bool) -> Result<Vec<User>, Error>;
    async fn get_by_id(&self, id: i64) -> Result<Option<User>, Error>;
    async fn create(&self, user: &User) -> Result<User, Error>;
    async fn update(&self, user: &User) -> Result<(), Error>;

    /// Returns `false` when no user with that id exists; that is not an error.
    async fn delete_if_exists(&self, user: &User) -> Result<bool, Error>;
}

#[async_trait]
pub trait LogApi: Send + Sync {
    async fn log_action(&self, user: &User, action: &str, details: Option<&str>) -> Result<Log, Error>;

    // The read side always resolves the owning user.
    async fn list_all(&self) -> Result<Vec<Log>, Error>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Log>, Error>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Log>, Error>;
}
