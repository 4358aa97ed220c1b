// File: usermgmt-core/src/db/mod.rs

mod seed;
pub mod table;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::Error;
use usermgmt_common::models::{Log, User};

pub use table::Table;

/// What happens to a user's log entries when the user is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteBehavior {
    /// Logs are left alone; their `user_id` points at a user that no longer exists.
    #[default]
    NoAction,
    /// Logs are kept with `user_id` cleared.
    SetNull,
    /// Logs are removed together with the user.
    Cascade,
}

impl FromStr for DeleteBehavior {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no-action" | "noaction" | "restrict" => Ok(DeleteBehavior::NoAction),
            "set-null" | "setnull" => Ok(DeleteBehavior::SetNull),
            "cascade" => Ok(DeleteBehavior::Cascade),
            other => Err(Error::Parse(format!("Unknown delete behavior: {}", other))),
        }
    }
}

impl fmt::Display for DeleteBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeleteBehavior::NoAction => "no-action",
            DeleteBehavior::SetNull => "set-null",
            DeleteBehavior::Cascade => "cascade",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub on_user_delete: DeleteBehavior,
}

/// Every table the application knows about.
pub struct Tables {
    pub users: Table<User>,
    pub logs: Table<Log>,
}

impl Tables {
    fn new() -> Self {
        Self {
            users: Table::new("User"),
            logs: Table::new("Log"),
        }
    }
}

/// Process-wide in-memory store. Clones share the same tables.
///
/// Readers run concurrently; writers (and therefore id allocation) are serialised.
#[derive(Clone)]
pub struct Database {
    tables: Arc<RwLock<Tables>>,
    config: StoreConfig,
}

impl Database {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::new())),
            config,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(StoreConfig::default())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_behavior_round_trips_through_str() {
        for behavior in [DeleteBehavior::NoAction, DeleteBehavior::SetNull, DeleteBehavior::Cascade] {
            let parsed: DeleteBehavior = behavior.to_string().parse().unwrap();
            assert_eq!(parsed, behavior);
        }
        assert_eq!("Restrict".parse::<DeleteBehavior>().unwrap(), DeleteBehavior::NoAction);
        assert!("explode".parse::<DeleteBehavior>().is_err());
    }

    #[tokio::test]
    async fn test_clones_share_tables() {
        let db = Database::in_memory();
        let other = db.clone();
        db.seed().await.unwrap();
        assert_eq!(other.read().await.users.len(), 11);
    }
}
