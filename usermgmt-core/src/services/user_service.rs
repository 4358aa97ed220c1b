// File: usermgmt-core/src/services/user_service.rs

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::repositories::UserRepo;
use crate::Error;
use usermgmt_common::models::User;
use usermgmt_common::traits::UserApi;

pub struct UserService {
    user_repo: Arc<dyn UserRepo>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepo>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserApi for UserService {
    async fn list_all(&self) -> Result<Vec<User>, Error> {
        let mut users = self.user_repo.list_all().await?;
        // Table order is not guaranteed once rows have been removed.
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn filter_by_active(&self, is_active: bool) -> Result<Vec<User>, Error> {
        let users = self.user_repo.list_all().await?;
        Ok(users.into_iter().filter(|u| u.is_active == is_active).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, Error> {
        debug!("Looking up user id={}", id);
        self.user_repo.get(id).await
    }

    async fn create(&self, user: &User) -> Result<User, Error> {
        let stored = self.user_repo.create(user).await?;
        info!("Created user id={} email={}", stored.id, stored.email);
        Ok(stored)
    }

    async fn update(&self, user: &User) -> Result<(), Error> {
        self.user_repo.update(user).await?;
        info!("Updated user id={}", user.id);
        Ok(())
    }

    async fn delete_if_exists(&self, user: &User) -> Result<bool, Error> {
        match self.user_repo.get(user.id).await? {
            Some(existing) => {
                self.user_repo.delete(existing.id).await?;
                info!("Deleted user id={} email={}", existing.id, existing.email);
                Ok(true)
            }
            None => {
                debug!("delete_if_exists: no user with id={}", user.id);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepo;
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn user(id: i64, email: &str, is_active: bool) -> User {
        let mut u = User::new(
            "Johnny",
            "User",
            NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
            email,
            is_active,
        );
        u.id = id;
        u
    }

    #[tokio::test]
    async fn test_list_all_sorts_by_id() -> Result<(), Error> {
        let mut repo = MockUserRepo::new();
        repo.expect_list_all().returning(|| {
            Ok(vec![
                user(7, "c@example.com", true),
                user(2, "a@example.com", true),
                user(5, "b@example.com", false),
            ])
        });

        let service = UserService::new(Arc::new(repo));
        let ids: Vec<i64> = service.list_all().await?.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 5, 7]);
        Ok(())
    }

    #[tokio::test]
    async fn test_filter_by_active() -> Result<(), Error> {
        let mut repo = MockUserRepo::new();
        repo.expect_list_all().returning(|| {
            Ok(vec![
                user(1, "a@example.com", true),
                user(2, "b@example.com", false),
                user(3, "c@example.com", true),
            ])
        });
        let service = UserService::new(Arc::new(repo));

        let active = service.filter_by_active(true).await?;
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|u| u.is_active));

        let inactive = service.filter_by_active(false).await?;
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].id, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_delegates_to_repo() -> Result<(), Error> {
        let mut repo = MockUserRepo::new();
        repo.expect_create()
            .withf(|u| u.email == "new@example.com" && u.id == 0)
            .times(1)
            .returning(|u| {
                let mut stored = u.clone();
                stored.id = 12;
                Ok(stored)
            });

        let service = UserService::new(Arc::new(repo));
        let created = service.create(&user(0, "new@example.com", true)).await?;
        assert_eq!(created.id, 12);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_delegates_to_repo() -> Result<(), Error> {
        let mut repo = MockUserRepo::new();
        repo.expect_update()
            .withf(|u| u.id == 1 && u.forename == "Johnny")
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repo));
        service.update(&user(1, "a@example.com", true)).await
    }

    #[tokio::test]
    async fn test_delete_if_exists_deletes_fetched_user() -> Result<(), Error> {
        let mut repo = MockUserRepo::new();
        repo.expect_get()
            .with(eq(3))
            .times(1)
            .returning(|id| Ok(Some(user(id, "c@example.com", false))));
        repo.expect_delete().with(eq(3)).times(1).returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repo));
        assert!(service.delete_if_exists(&user(3, "stale@example.com", true)).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_if_exists_missing_user_is_noop() -> Result<(), Error> {
        let mut repo = MockUserRepo::new();
        repo.expect_get().with(eq(42)).returning(|_| Ok(None));
        repo.expect_delete().never();

        let service = UserService::new(Arc::new(repo));
        assert!(!service.delete_if_exists(&user(42, "ghost@example.com", true)).await?);
        Ok(())
    }
}
