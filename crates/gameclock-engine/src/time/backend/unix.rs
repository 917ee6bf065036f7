use crate::time::{ClockError, TimePoint};

use super::scale;

/// `CLOCK_MONOTONIC` backed clock for Linux, Android and the BSDs.
///
/// The kernel already reports seconds and nanoseconds, so there is no
/// calibration step.
#[derive(Debug, Copy, Clone)]
pub struct UnixClock {
    seconds_per_tick: f64,
}

impl UnixClock {
    pub const BACKEND: &'static str = "unix";

    pub fn new() -> Result<Self, ClockError> {
        // Probe once so an absent clock surfaces here rather than on a read.
        let mut res = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        let rc = unsafe { libc::clock_getres(libc::CLOCK_MONOTONIC, &mut res) };
        if rc != 0 {
            let os_err = std::io::Error::last_os_error();
            return Err(ClockError::timer_unavailable(
                Self::BACKEND,
                format!("clock_getres(CLOCK_MONOTONIC) failed: {os_err}"),
            ));
        }

        let seconds_per_tick = scale::seconds_per_tick_from_resolution(
            Self::BACKEND,
            res.tv_sec as i64,
            res.tv_nsec as i64,
        )?;

        Ok(Self { seconds_per_tick })
    }

    #[inline]
    pub fn seconds_per_tick(&self) -> f64 {
        self.seconds_per_tick
    }

    #[inline]
    pub fn now(&self) -> TimePoint {
        let mut ts = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        // CLOCK_MONOTONIC was validated in `new`; with a valid pointer this cannot fail.
        let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
        debug_assert_eq!(rc, 0);

        TimePoint::from_secs_f64(ts.tv_sec as f64 + ts.tv_nsec as f64 * self.seconds_per_tick)
    }
}
