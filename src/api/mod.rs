//! API layer - HTTP endpoints

pub mod health;
pub mod root;
pub mod router;
pub mod state;
pub mod types;
pub mod v1;

pub use router::create_router;
pub use state::AppState;
