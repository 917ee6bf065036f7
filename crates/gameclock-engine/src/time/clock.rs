use state::InitCell;

use super::backend::Platform;
use super::{ClockError, TimePoint, TimeSource};

static GLOBAL: InitCell<MonotonicClock> = InitCell::new();

/// Monotonic clock backed by the platform's high-resolution timer.
///
/// The tick-to-seconds scale is computed once in [`MonotonicClock::new`]; reads
/// are a single OS counter query plus a multiply. Values are seconds since an
/// arbitrary per-process epoch and never decrease. Wall-clock adjustments do
/// not affect them.
///
/// The clock is `Copy`, `Send` and `Sync`. It holds no handles, so dropping it
/// has no side effects.
#[derive(Debug, Copy, Clone)]
pub struct MonotonicClock {
    inner: Platform,
}

impl MonotonicClock {
    /// Queries the platform timer and caches its scale factor.
    ///
    /// Fails when the OS reports a zero frequency or timebase. This check runs
    /// in every build profile.
    pub fn new() -> Result<Self, ClockError> {
        let inner = Platform::new()?;
        debug_assert!(inner.seconds_per_tick() > 0.0);

        log::debug!(
            "monotonic clock: backend={} seconds_per_tick={:e}",
            Platform::BACKEND,
            inner.seconds_per_tick()
        );

        Ok(Self { inner })
    }

    /// Process-wide clock, constructed on first use.
    ///
    /// Concurrent first calls may each build a clock; only one is kept.
    pub fn global() -> Result<&'static MonotonicClock, ClockError> {
        if let Some(clock) = GLOBAL.try_get() {
            return Ok(clock);
        }

        let clock = MonotonicClock::new()?;
        Ok(GLOBAL.get_or_init(|| clock))
    }

    /// Name of the compiled-in backend: `"unix"`, `"apple"` or `"windows"`.
    pub const fn backend() -> &'static str {
        Platform::BACKEND
    }

    /// Seconds represented by one raw timer tick. Always positive.
    #[inline]
    pub fn seconds_per_tick(&self) -> f64 {
        self.inner.seconds_per_tick()
    }

    /// Current reading of the clock.
    #[inline]
    pub fn now(&self) -> TimePoint {
        self.inner.now()
    }
}

impl TimeSource for MonotonicClock {
    #[inline]
    fn now(&self) -> TimePoint {
        self.inner.now()
    }
}
