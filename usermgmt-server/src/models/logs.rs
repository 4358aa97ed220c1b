// File: usermgmt-server/src/models/logs.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use usermgmt_common::models::Log;

/// Shown in place of an email when the owning user no longer resolves.
pub const DELETED_USER: &str = "(deleted user)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogListItemViewModel {
    pub id: i64,
    pub action: String,
    pub user_email: String,
    pub timestamp: DateTime<Utc>,
    pub details: Option<String>,
}

impl From<&Log> for LogListItemViewModel {
    fn from(log: &Log) -> Self {
        Self {
            id: log.id,
            action: log.action.clone(),
            user_email: log.user_email().unwrap_or(DELETED_USER).to_string(),
            timestamp: log.timestamp,
            details: log.details.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogIndexViewModel {
    pub logs: Vec<LogListItemViewModel>,
    pub email_filter: Option<String>,
    pub action_filter: Option<String>,
    pub page: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogDetailsViewModel {
    pub id: i64,
    pub user_email: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub details: Option<String>,
}

impl From<&Log> for LogDetailsViewModel {
    fn from(log: &Log) -> Self {
        Self {
            id: log.id,
            user_email: log.user_email().unwrap_or(DELETED_USER).to_string(),
            action: log.action.clone(),
            timestamp: log.timestamp,
            details: log.details.clone(),
        }
    }
}

/// `GET /logs/Index?email=&actionFilter=&page=&pageSize=`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogIndexQuery {
    pub email: Option<String>,
    pub action_filter: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
