// libc flags its Mach bindings as deprecated in favour of `mach2`; libc is
// kept so every backend shares one FFI crate.
#![allow(deprecated)]

use crate::time::{ClockError, TimePoint};

use super::scale;

/// `mach_absolute_time` backed clock for macOS and iOS.
///
/// Ticks are converted through the Mach timebase fraction, which is queried
/// once at construction.
#[derive(Debug, Copy, Clone)]
pub struct AppleClock {
    seconds_per_tick: f64,
}

impl AppleClock {
    pub const BACKEND: &'static str = "apple";

    pub fn new() -> Result<Self, ClockError> {
        let mut info = libc::mach_timebase_info_data_t { numer: 0, denom: 0 };
        let kr = unsafe { libc::mach_timebase_info(&mut info) };
        if kr != 0 {
            return Err(ClockError::timer_unavailable(
                Self::BACKEND,
                format!("mach_timebase_info failed with status {kr}"),
            ));
        }

        let seconds_per_tick =
            scale::seconds_per_tick_from_timebase(Self::BACKEND, info.numer, info.denom)?;

        Ok(Self { seconds_per_tick })
    }

    #[inline]
    pub fn seconds_per_tick(&self) -> f64 {
        self.seconds_per_tick
    }

    #[inline]
    pub fn now(&self) -> TimePoint {
        let ticks = unsafe { libc::mach_absolute_time() };
        TimePoint::from_secs_f64(ticks as f64 * self.seconds_per_tick)
    }
}
