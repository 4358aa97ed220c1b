// File: usermgmt-common/src/models/log.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Entity, User};

pub const ACTION_CREATED: &str = "Created";
pub const ACTION_EDITED: &str = "Edited";
pub const ACTION_DELETED: &str = "Deleted";

/// One audit entry. `user_id` is nullable so an entry can outlive its user.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Log {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub details: Option<String>,

    /// Only filled in when loaded with [`LogRelation::User`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Box<User>>,
}

impl Log {
    pub fn new(user: &User, action: &str, details: Option<&str>) -> Self {
        let mut owner = user.clone();
        owner.logs.clear();
        Self {
            id: 0,
            user_id: Some(user.id),
            action: action.to_string(),
            timestamp: Utc::now(),
            details: details.map(String::from),
            user: Some(Box::new(owner)),
        }
    }

    /// Email of the resolved owner, if the owner was loaded and still exists.
    pub fn user_email(&self) -> Option<&str> {
        self.user.as_deref().map(|u| u.email.as_str())
    }
}

impl Entity for Log {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn detach(&mut self) {
        self.user = None;
    }
}

/// Navigation properties that can be resolved when loading logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRelation {
    User,
}
