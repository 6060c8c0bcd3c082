//! Time source for build timestamps.

use crate::utils::date::DateTimeUtc;

/// Supplies the current time.
///
/// Every call is an independent capture; the pass asks twice, once for the
/// HTML placeholder and once for `version.json`.
pub trait Clock {
    fn now(&self) -> DateTimeUtc;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTimeUtc {
        DateTimeUtc::now()
    }
}

/// A clock frozen at one instant, for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTimeUtc);

impl Clock for FixedClock {
    fn now(&self) -> DateTimeUtc {
        self.0
    }
}
