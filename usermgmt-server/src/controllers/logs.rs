// File: usermgmt-server/src/controllers/logs.rs

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use tracing::debug;

use usermgmt_common::traits::LogApi;
use usermgmt_core::Error;

use crate::controllers::AppState;
use crate::models::{IdQuery, LogDetailsViewModel, LogIndexQuery, LogIndexViewModel, LogListItemViewModel};
use crate::result::{ActionResult, ApiError};

pub struct LogsController {
    logs: Arc<dyn LogApi>,
    default_page_size: i64,
}

impl LogsController {
    pub fn new(logs: Arc<dyn LogApi>, default_page_size: i64) -> Self {
        Self {
            logs,
            default_page_size: default_page_size.max(1),
        }
    }

    /// Filtered, newest-first, paged listing.
    ///
    /// The requested page is echoed as given: a page past the end (or below 1)
    /// yields no items rather than being clamped. A page size below 1 falls
    /// back to the configured default.
    pub async fn index(&self, query: LogIndexQuery) -> Result<ActionResult<LogIndexViewModel>, Error> {
        let email_filter = non_blank(query.email);
        let action_filter = non_blank(query.action_filter);
        let page = query.page.unwrap_or(1);
        let page_size = query
            .page_size
            .filter(|size| *size >= 1)
            .unwrap_or(self.default_page_size);

        let mut logs = self.logs.list_all().await?;

        if let Some(needle) = &email_filter {
            let needle = needle.to_lowercase();
            logs.retain(|log| {
                log.user_email()
                    .is_some_and(|email| email.to_lowercase().contains(&needle))
            });
        }
        if let Some(needle) = &action_filter {
            let needle = needle.to_lowercase();
            logs.retain(|log| log.action.to_lowercase().contains(&needle));
        }

        let total = logs.len() as i64;
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));

        let items = if page < 1 {
            Vec::new()
        } else {
            let skip = (page - 1).saturating_mul(page_size);
            logs.iter()
                .skip(to_usize(skip))
                .take(to_usize(page_size))
                .map(LogListItemViewModel::from)
                .collect()
        };
        debug!("Logs index: {} matching, page {} of size {}", total, page, page_size);

        Ok(ActionResult::View(LogIndexViewModel {
            logs: items,
            email_filter,
            action_filter,
            page,
            total_pages: total / page_size + i64::from(total % page_size != 0),
        }))
    }

    pub async fn view(&self, id: Option<i64>) -> Result<ActionResult<LogDetailsViewModel>, Error> {
        let log = match id {
            Some(id) => self.logs.get_by_id(id).await?,
            None => None,
        };
        Ok(match log {
            Some(log) => ActionResult::View(LogDetailsViewModel::from(&log)),
            None => ActionResult::NotFound,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn to_usize(n: i64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/logs", get(index))
        .route("/logs/Index", get(index))
        .route("/logs/View", get(view))
}

async fn index(
    State(state): State<AppState>,
    Query(query): Query<LogIndexQuery>,
) -> Result<ActionResult<LogIndexViewModel>, ApiError> {
    Ok(state.logs.index(query).await?)
}

async fn view(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<ActionResult<LogDetailsViewModel>, ApiError> {
    Ok(state.logs.view(query.id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, Utc};
    use usermgmt_common::models::{Log, User};
    use usermgmt_core::repositories::{LogRepo, LogRepository, UserRepo, UserRepository};
    use usermgmt_core::services::LogService;
    use usermgmt_core::{Database, DeleteBehavior, StoreConfig};

    /// Builds a store holding `count` logs, one user each, with log `i`
    /// stamped `i` minutes in the past.
    async fn setup_logs(count: i64, action: impl Fn(i64) -> String) -> Result<LogsController, Error> {
        let db = Database::in_memory();
        let users = UserRepository::new(db.clone());
        let logs = LogRepository::new(db.clone());
        let now = Utc::now();

        for i in 1..=count {
            let user = users
                .create(&User::new(
                    "Log",
                    "Owner",
                    NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                    &format!("user{}@example.com", i),
                    true,
                ))
                .await?;
            let mut log = Log::new(&user, &action(i), None);
            log.timestamp = now - Duration::minutes(i);
            logs.create(&log).await?;
        }

        Ok(LogsController::new(Arc::new(LogService::new(Arc::new(logs))), 10))
    }

    fn query(page: Option<i64>, page_size: Option<i64>) -> LogIndexQuery {
        LogIndexQuery {
            page,
            page_size,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_index_without_filters() -> Result<(), Error> {
        let controller = setup_logs(2, |i| if i == 1 { "Created".into() } else { "Edited".into() }).await?;
        let model = controller.index(query(Some(1), Some(10))).await?.into_view().expect("view");
        assert_eq!(model.logs.len(), 2);
        assert_eq!(model.page, 1);
        assert_eq!(model.total_pages, 1);
        // newest first
        assert_eq!(model.logs[0].user_email, "user1@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn test_index_paginates() -> Result<(), Error> {
        let controller = setup_logs(25, |i| format!("Action {}", i)).await?;
        let model = controller.index(query(Some(2), Some(10))).await?.into_view().expect("view");
        assert_eq!(model.logs.len(), 10);
        assert_eq!(model.page, 2);
        assert_eq!(model.total_pages, 3);
        assert_eq!(model.logs[0].action, "Action 11");
        assert!(model.logs.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

        let last = controller.index(query(Some(3), Some(10))).await?.into_view().expect("view");
        assert_eq!(last.logs.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_index_out_of_range_page_is_empty_but_echoed() -> Result<(), Error> {
        let controller = setup_logs(25, |i| format!("Action {}", i)).await?;
        let model = controller.index(query(Some(999), Some(10))).await?.into_view().expect("view");
        assert!(model.logs.is_empty());
        assert_eq!(model.page, 999);
        assert_eq!(model.total_pages, 3);

        let model = controller.index(query(Some(-1), Some(-10))).await?.into_view().expect("view");
        assert!(model.logs.is_empty());
        assert_eq!(model.page, -1);
        assert_eq!(model.total_pages, 3, "bad page size falls back to the default");
        Ok(())
    }

    #[tokio::test]
    async fn test_index_with_huge_page_size() -> Result<(), Error> {
        let controller = setup_logs(3, |i| format!("Action {}", i)).await?;
        let model = controller
            .index(query(Some(1), Some(i64::MAX)))
            .await?
            .into_view()
            .expect("view");
        assert_eq!(model.logs.len(), 3);
        assert_eq!(model.total_pages, 1);

        let model = controller
            .index(query(Some(i64::MAX), Some(i64::MAX)))
            .await?
            .into_view()
            .expect("view");
        assert!(model.logs.is_empty());
        assert_eq!(model.page, i64::MAX);
        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_action_case_insensitively() -> Result<(), Error> {
        let controller = setup_logs(6, |i| if i % 2 == 0 { "Edited".into() } else { "Created".into() }).await?;
        let model = controller
            .index(LogIndexQuery {
                action_filter: Some("edit".to_string()),
                ..Default::default()
            })
            .await?
            .into_view()
            .expect("view");
        assert_eq!(model.logs.len(), 3);
        assert!(model.logs.iter().all(|l| l.action.contains("Edit")));
        assert_eq!(model.action_filter.as_deref(), Some("edit"));
        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_email() -> Result<(), Error> {
        let controller = setup_logs(12, |_| "Created".to_string()).await?;
        let model = controller
            .index(LogIndexQuery {
                email: Some("  USER1@ ".to_string()),
                ..Default::default()
            })
            .await?
            .into_view()
            .expect("view");
        assert_eq!(model.logs.len(), 1);
        assert_eq!(model.logs[0].user_email, "user1@example.com");
        assert_eq!(model.email_filter.as_deref(), Some("USER1@"));
        Ok(())
    }

    #[tokio::test]
    async fn test_index_no_matches() -> Result<(), Error> {
        let controller = setup_logs(3, |_| "Created".to_string()).await?;
        let model = controller
            .index(LogIndexQuery {
                email: Some("nonexistent".to_string()),
                action_filter: Some("nonexistent".to_string()),
                ..Default::default()
            })
            .await?
            .into_view()
            .expect("view");
        assert!(model.logs.is_empty());
        assert_eq!(model.total_pages, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_view_log_and_deleted_owner() -> Result<(), Error> {
        let db = Database::new(StoreConfig {
            on_user_delete: DeleteBehavior::NoAction,
        });
        db.seed().await?;
        let users = UserRepository::new(db.clone());
        let logs = LogRepository::new(db.clone());
        let controller = LogsController::new(Arc::new(LogService::new(Arc::new(logs.clone()))), 10);

        let owner = users.get(1).await?.expect("seeded");
        let stored = logs.create(&Log::new(&owner, "Created", Some("Details here"))).await?;

        let model = controller.view(Some(stored.id)).await?.into_view().expect("view");
        assert_eq!(model.id, stored.id);
        assert_eq!(model.user_email, "ploew@example.com");
        assert_eq!(model.details.as_deref(), Some("Details here"));

        users.delete(1).await?;
        let model = controller.view(Some(stored.id)).await?.into_view().expect("view");
        assert_eq!(model.user_email, "(deleted user)");

        assert_eq!(controller.view(Some(999)).await?, ActionResult::NotFound);
        assert_eq!(controller.view(None).await?, ActionResult::NotFound);
        Ok(())
    }
}
