use winapi::um::profileapi::{QueryPerformanceCounter, QueryPerformanceFrequency};
use winapi::um::winnt::LARGE_INTEGER;

use crate::time::{ClockError, TimePoint};

use super::scale;

/// Performance-counter backed clock for Windows.
#[derive(Debug, Copy, Clone)]
pub struct WindowsClock {
    seconds_per_tick: f64,
}

impl WindowsClock {
    pub const BACKEND: &'static str = "windows";

    pub fn new() -> Result<Self, ClockError> {
        let mut frequency: LARGE_INTEGER = unsafe { std::mem::zeroed() };
        let ok = unsafe { QueryPerformanceFrequency(&mut frequency) };
        if ok == 0 {
            let os_err = std::io::Error::last_os_error();
            return Err(ClockError::timer_unavailable(
                Self::BACKEND,
                format!("QueryPerformanceFrequency failed: {os_err}"),
            ));
        }

        let ticks_per_second = unsafe { *frequency.QuadPart() };
        let seconds_per_tick =
            scale::seconds_per_tick_from_frequency(Self::BACKEND, ticks_per_second)?;

        Ok(Self { seconds_per_tick })
    }

    #[inline]
    pub fn seconds_per_tick(&self) -> f64 {
        self.seconds_per_tick
    }

    #[inline]
    pub fn now(&self) -> TimePoint {
        let mut counter: LARGE_INTEGER = unsafe { std::mem::zeroed() };
        // Never fails on Windows XP and later.
        unsafe { QueryPerformanceCounter(&mut counter) };
        let ticks = unsafe { *counter.QuadPart() };

        TimePoint::from_secs_f64(ticks as f64 * self.seconds_per_tick)
    }
}
