//! Tick-to-seconds conversions shared by the backends.
//!
//! Kept free of FFI so every target compiles and tests them, whichever
//! backend is active.

use crate::time::ClockError;

pub(super) const NANOS_TO_SECS: f64 = 1.0 / 1_000_000_000.0;

/// Scale for clocks that report seconds and nanoseconds directly.
///
/// `res_sec` / `res_nsec` is the clock's reported resolution; zero means the
/// clock does not tick.
#[cfg_attr(any(not(unix), target_vendor = "apple"), allow(dead_code))]
pub(super) fn seconds_per_tick_from_resolution(
    backend: &'static str,
    res_sec: i64,
    res_nsec: i64,
) -> Result<f64, ClockError> {
    if res_sec < 0 || res_nsec < 0 || (res_sec == 0 && res_nsec == 0) {
        return Err(ClockError::timer_unavailable(
            backend,
            format!("clock resolution is {res_sec}s {res_nsec}ns"),
        ));
    }

    Ok(NANOS_TO_SECS)
}

/// Scale for a Mach-style `numer / denom` nanoseconds-per-tick timebase.
#[cfg_attr(not(target_vendor = "apple"), allow(dead_code))]
pub(super) fn seconds_per_tick_from_timebase(
    backend: &'static str,
    numer: u32,
    denom: u32,
) -> Result<f64, ClockError> {
    if numer == 0 || denom == 0 {
        return Err(ClockError::timer_unavailable(
            backend,
            format!("degenerate timebase {numer}/{denom}"),
        ));
    }

    let nanos_per_tick = f64::from(numer) / f64::from(denom);
    Ok(nanos_per_tick * NANOS_TO_SECS)
}

/// Scale for a counter reporting `ticks_per_second`.
#[cfg_attr(not(windows), allow(dead_code))]
pub(super) fn seconds_per_tick_from_frequency(
    backend: &'static str,
    ticks_per_second: i64,
) -> Result<f64, ClockError> {
    if ticks_per_second <= 0 {
        return Err(ClockError::timer_unavailable(
            backend,
            format!("counter frequency is {ticks_per_second}"),
        ));
    }

    Ok(1.0 / ticks_per_second as f64)
}
