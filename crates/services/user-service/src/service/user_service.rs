//! User lookup service - finds a single user by email.
//!
//! SOLID (SRP): Handles the read-only lookup use case only.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use common::{AppResult, OptionExt};
use domain::{validate_lookup_email, User};

use crate::repository::UserRepository;

/// User lookup trait for dependency injection.
///
/// Implementations hold no mutable state; one instance serves any number
/// of concurrent callers.
#[async_trait]
pub trait UserLookupService: Send + Sync {
    /// Find the user stored under `email`.
    ///
    /// Returns `AppError::NotFound` on a miss, a store error (carrying its
    /// cause) when the store cannot answer, and `AppError::Validation` for a
    /// blank or oversized key. Issues at most one store query and never
    /// retries.
    async fn find_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Check that the backing store answers queries
    async fn check_store(&self) -> AppResult<()>;
}

/// Concrete implementation of UserLookupService using a repository.
pub struct LookupManager {
    repo: Arc<dyn UserRepository>,
}

impl LookupManager {
    /// Create new lookup service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserLookupService for LookupManager {
    async fn find_user_by_email(&self, email: &str) -> AppResult<User> {
        let email = validate_lookup_email(email)?;

        let found = self.repo.find_by_email(email).await.map_err(|e| {
            error!(email, error = %e, "User lookup failed");
            e
        })?;

        if found.is_none() {
            debug!(email, "No user stored under email");
        }

        found.ok_or_not_found()
    }

    async fn check_store(&self) -> AppResult<()> {
        self.repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use mockall::predicate::eq;

    use crate::repository::MockUserRepository;

    fn ann() -> User {
        User::new("a@x.com", "Ann", "http://img/ann.png")
    }

    fn service(repo: MockUserRepository) -> LookupManager {
        LookupManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_find_user_by_email_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(|_| Ok(Some(ann())));

        let user = service(repo).find_user_by_email("a@x.com").await.unwrap();

        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.profile_url, "http://img/ann.png");
    }

    #[tokio::test]
    async fn test_find_user_by_email_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("missing@x.com"))
            .times(1)
            .returning(|_| Ok(None));

        let result = service(repo).find_user_by_email("missing@x.com").await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
        assert!(!err.is_store_error());
    }

    #[tokio::test]
    async fn test_find_user_by_email_store_failure_is_not_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .returning(|_| Err(AppError::store("connection refused")));

        let err = service(repo)
            .find_user_by_email("a@x.com")
            .await
            .unwrap_err();

        assert!(!matches!(err, AppError::NotFound));
        assert_eq!(err.store_cause().as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_blank_email_rejected_before_query() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();

        let err = service(repo).find_user_by_email("  ").await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_email_passed_to_store_unchanged() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("Ann@X.com"))
            .times(1)
            .returning(|_| Ok(None));

        let result = service(repo).find_user_by_email("Ann@X.com").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_repeated_lookups_are_identical() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(2)
            .returning(|_| Ok(Some(ann())));

        let service = service(repo);
        let first = service.find_user_by_email("a@x.com").await.unwrap();
        let second = service.find_user_by_email("a@x.com").await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_concurrent_lookups_are_independent() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(3)
            .returning(|email| match email {
                "a@x.com" => Ok(Some(ann())),
                "down@x.com" => Err(AppError::store("timeout")),
                _ => Ok(None),
            });

        let service: Arc<dyn UserLookupService> = Arc::new(service(repo));
        let (hit, miss, failed) = tokio::join!(
            service.find_user_by_email("a@x.com"),
            service.find_user_by_email("missing@x.com"),
            service.find_user_by_email("down@x.com"),
        );

        assert_eq!(hit.unwrap(), ann());
        assert!(matches!(miss, Err(AppError::NotFound)));
        assert!(failed.unwrap_err().is_store_error());
    }

    #[tokio::test]
    async fn test_check_store_delegates_to_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_ping()
            .times(1)
            .returning(|| Err(AppError::store("connection refused")));

        let err = service(repo).check_store().await.unwrap_err();

        assert!(err.is_store_error());
    }
}
