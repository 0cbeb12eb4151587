use thiserror::Error;

use crate::domain::user::UserValidationError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Entity invariant violations travel unchanged through repositories and
/// use cases; the `?` operator carries them across layer boundaries.
impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        Self::InvalidArgument {
            message: err.to_string(),
        }
    }
}
