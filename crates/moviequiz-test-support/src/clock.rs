//! Frozen clock for dating game records in tests.

use chrono::{DateTime, TimeZone, Utc};
use moviequiz_core::clock::Clock;

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to midnight UTC on the given calendar day.
    ///
    /// # Panics
    ///
    /// Panics if the date does not exist.
    #[must_use]
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        Self(Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
