//! Use case for resolving a user by username

use std::sync::Arc;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// Resolves a user by username
///
/// Leading and trailing whitespace is stripped from the input before it
/// reaches the repository. A username that is empty or whitespace-only is
/// rejected up front; the repository never sees it.
#[derive(Debug)]
pub struct GetUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    /// Create a new use case backed by the given repository
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Resolve the user for `username`
    pub async fn execute(&self, username: &str) -> Result<User, DomainError> {
        let trimmed = username.trim();

        if trimmed.is_empty() {
            return Err(DomainError::invalid_argument("Username cannot be empty"));
        }

        self.user_repository.get_by_username(trimmed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;

    fn create_use_case(repository: Arc<MockUserRepository>) -> GetUserUseCase {
        GetUserUseCase::new(repository)
    }

    #[tokio::test]
    async fn test_execute_returns_user() {
        let repository = Arc::new(MockUserRepository::new());
        let use_case = create_use_case(repository.clone());

        let user = use_case.execute("sebas").await.expect("lookup should succeed");

        assert_eq!(user.username(), "sebas");
        assert_eq!(repository.calls(), vec!["sebas".to_string()]);
    }

    #[tokio::test]
    async fn test_execute_trims_whitespace() {
        let repository = Arc::new(MockUserRepository::new());
        let use_case = create_use_case(repository.clone());

        let user = use_case.execute("  alice  ").await.unwrap();

        assert_eq!(user.username(), "alice");
        assert_eq!(repository.calls(), vec!["alice".to_string()]);
    }

    #[tokio::test]
    async fn test_execute_rejects_empty_username() {
        let repository = Arc::new(MockUserRepository::new());
        let use_case = create_use_case(repository.clone());

        let result = use_case.execute("").await;

        assert!(matches!(
            result,
            Err(DomainError::InvalidArgument { .. })
        ));
        assert!(repository.calls().is_empty());
    }

    #[tokio::test]
    async fn test_execute_rejects_whitespace_only_username() {
        let repository = Arc::new(MockUserRepository::new());
        let use_case = create_use_case(repository.clone());

        let result = use_case.execute("   ").await;

        assert!(matches!(
            result,
            Err(DomainError::InvalidArgument { .. })
        ));
        assert!(repository.calls().is_empty());
    }

    #[tokio::test]
    async fn test_execute_preserves_case() {
        let repository = Arc::new(MockUserRepository::new());
        let use_case = create_use_case(repository.clone());

        let user = use_case.execute("Sebas").await.unwrap();

        assert_eq!(user.username(), "Sebas");
    }

    #[tokio::test]
    async fn test_execute_propagates_repository_error() {
        let repository = Arc::new(MockUserRepository::new().with_error("store unavailable"));
        let use_case = create_use_case(repository);

        let result = use_case.execute("sebas").await;

        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
