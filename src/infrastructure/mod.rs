//! Infrastructure layer - Concrete implementations of domain ports

pub mod clock;
pub mod health;
pub mod logging;
pub mod user;

pub use clock::SystemClock;
pub use health::InMemoryHealthRepository;
pub use user::InMemoryUserRepository;
