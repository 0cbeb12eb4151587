//! User domain
//!
//! Domain types for the user directory: the validated username value
//! object, the user entity and the repository trait with its
//! lookup-or-create contract.

mod entity;
mod repository;
mod validation;

pub use entity::{User, Username};
pub use repository::UserRepository;
pub use validation::{validate_username, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
