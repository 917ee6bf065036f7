use std::cell::Cell;
use std::sync::Arc;

use super::{Duration, TimePoint};

/// Anything that can report a monotonic `TimePoint`.
///
/// Implementations must never return a value smaller than one they returned
/// before, and `now` must not block or fail.
pub trait TimeSource {
    fn now(&self) -> TimePoint;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline]
    fn now(&self) -> TimePoint {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    #[inline]
    fn now(&self) -> TimePoint {
        (**self).now()
    }
}

/// Hand-driven time source.
///
/// Useful for tests and replay where frame timing must be deterministic.
/// Time only moves when told to, and never backward.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<TimePoint>,
}

impl ManualClock {
    pub fn new(start: TimePoint) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Moves the clock forward by `by`. Negative or non-finite steps are ignored.
    pub fn advance(&self, by: Duration) {
        if by.is_negative() || !by.is_finite() {
            log::warn!("ManualClock: ignoring step of {by}");
            return;
        }
        self.now.set(self.now.get() + by);
    }

    /// Moves the clock to `to`, unless that would move it backward.
    /// Non-finite instants are ignored.
    pub fn set(&self, to: TimePoint) {
        let current = self.now.get();
        if !to.as_secs_f64().is_finite() || to < current {
            log::warn!("ManualClock: refusing to move from {current} to {to}");
            return;
        }
        self.now.set(to);
    }
}

impl TimeSource for ManualClock {
    #[inline]
    fn now(&self) -> TimePoint {
        self.now.get()
    }
}
