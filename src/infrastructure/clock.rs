//! System clock implementation

use chrono::{SecondsFormat, Utc};

use crate::domain::clock::Clock;

/// Clock backed by the system time, formatted as RFC 3339 in UTC
///
/// Microsecond precision, so back-to-back instants stay distinguishable.
#[derive(Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}
