//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Unknown usernames are materialized on first lookup and stored, so
/// repeated lookups observe the same user. Keys are the exact bytes of
/// the username; "Sebas" and "sebas" are distinct users.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let users_map = users
            .into_iter()
            .map(|user| (user.username().to_string(), user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(users_map)),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_username(&self, username: &str) -> Result<User, DomainError> {
        {
            let users = self.users.read().await;

            if let Some(user) = users.get(username) {
                return Ok(user.clone());
            }
        }

        let mut users = self.users.write().await;

        // Another writer may have inserted between lock acquisitions
        if let Some(user) = users.get(username) {
            return Ok(user.clone());
        }

        let user = User::new(username)?;
        users.insert(username.to_string(), user.clone());

        Ok(user)
    }
}
