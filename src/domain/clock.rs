//! Clock abstraction for expiry computation.

use chrono::{DateTime, Utc};

/// Source of the current instant for the allocation and resolution engines.
///
/// Injected at service construction so expiry behavior can be tested with a
/// manual clock instead of sleeping through validity windows.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
