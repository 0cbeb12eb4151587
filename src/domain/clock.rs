//! Clock abstraction for timestamp generation

use std::fmt::Debug;

/// Source of the current instant as an ISO-8601 string
///
/// Injected wherever a timestamp is produced so tests can pin time.
pub trait Clock: Send + Sync + Debug {
    /// Current instant formatted as an ISO-8601 / RFC 3339 string
    fn now(&self) -> String;
}
