//! Time sources for the session.

use chrono::{Local, Timelike};

/// Supplies the current hour of the day.
pub trait Clock {
    /// Returns the hour (0-23).
    fn hour(&self) -> u32;
}

/// The system's local time.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// A clock stuck at one hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.0
    }
}
