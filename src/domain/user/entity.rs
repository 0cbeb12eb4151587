//! User entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_username, UserValidationError};

/// Validated username - non-empty, otherwise unconstrained
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a new Username after validation
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        validate_username(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
///
/// Immutable once constructed; equality is by value. Users are never
/// deleted and carry no state beyond their name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    username: Username,
}

impl User {
    /// Create a new user, enforcing the username invariant up front
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        Ok(Self {
            username: Username::new(username)?,
        })
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        let name = Username::new("sebas").unwrap();
        assert_eq!(name.as_str(), "sebas");
    }

    #[test]
    fn test_username_empty() {
        assert_eq!(Username::new(""), Err(UserValidationError::EmptyUsername));
    }

    #[test]
    fn test_username_preserves_whitespace() {
        let name = Username::new("  spaced  ").unwrap();
        assert_eq!(name.as_str(), "  spaced  ");
    }

    #[test]
    fn test_username_display() {
        let name = Username::new("alice").unwrap();
        assert_eq!(name.to_string(), "alice");
    }

    #[test]
    fn test_user_creation() {
        let user = User::new("sebas").unwrap();
        assert_eq!(user.username(), "sebas");
    }

    #[test]
    fn test_user_empty_username_rejected() {
        assert!(User::new("").is_err());
    }

    #[test]
    fn test_user_equality_by_value() {
        let left = User::new("alice").unwrap();
        let right = User::new("alice").unwrap();
        assert_eq!(left, right);
        assert_ne!(left, User::new("Alice").unwrap());
    }

    #[test]
    fn test_user_non_ascii_username() {
        let user = User::new("用户").unwrap();
        assert_eq!(user.username(), "用户");
    }

    #[test]
    fn test_username_serde_round_trip() {
        let name = Username::new("alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"alice\"");

        let back: Username = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn test_username_serde_rejects_empty() {
        let result: Result<Username, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
