//! Username validation utilities

use thiserror::Error;

/// Errors that can occur during username validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,
}

/// Validate a username
///
/// The only rule is non-emptiness. Whitespace, punctuation and non-ASCII
/// characters are all legal and stored verbatim; trimming is caller policy.
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("sebas").is_ok());
        assert!(validate_username("user-name").is_ok());
        assert!(validate_username("user@domain.com").is_ok());
        assert!(validate_username("用户").is_ok());
    }

    #[test]
    fn test_whitespace_is_legal() {
        assert!(validate_username("  spaced  ").is_ok());
        assert!(validate_username(" ").is_ok());
    }

    #[test]
    fn test_empty_username() {
        assert_eq!(
            validate_username(""),
            Err(UserValidationError::EmptyUsername)
        );
    }
}
