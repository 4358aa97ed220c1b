// File: usermgmt-common/src/models/user.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Entity, Log};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub forename: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub is_active: bool,

    /// Only filled in when loaded with [`UserRelation::Logs`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<Log>,
}

impl User {
    /// A user that has not been stored yet (id unset).
    pub fn new(
        forename: &str,
        surname: &str,
        date_of_birth: NaiveDate,
        email: &str,
        is_active: bool,
    ) -> Self {
        Self {
            id: 0,
            forename: forename.to_string(),
            surname: surname.to_string(),
            date_of_birth,
            email: email.to_string(),
            is_active,
            logs: Vec::new(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn detach(&mut self) {
        self.logs.clear();
    }
}

/// Navigation properties that can be resolved when loading users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRelation {
    Logs,
}
