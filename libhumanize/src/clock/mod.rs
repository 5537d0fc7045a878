//! Sources of "now".
//!
//! Relative phrases are computed against an injected [`Clock`] so callers can
//! pin the reference instant in tests.

use chrono::{DateTime, Local, TimeZone};

#[cfg(test)]
mod tests;

/// Supplies the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libhumanize::clock::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2021, 7, 10, 12, 0, 0).unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    /// Pins the clock to `instant`, converted to local time.
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            instant: instant.with_timezone(&Local),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}
