//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Repository trait for user resolution
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Resolve a username to its `User`, creating and storing one on first
    /// sight.
    ///
    /// Lookup is exact and case-sensitive on the raw string; the repository
    /// performs no trimming or normalization. Unknown names are provisioned
    /// rather than reported missing, so there is no "not found" outcome.
    /// An empty username fails entity construction and the failure
    /// propagates to the caller.
    async fn get_by_username(&self, username: &str) -> Result<User, DomainError>;
}
