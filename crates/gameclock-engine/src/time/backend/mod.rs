//! Platform timer backends.
//!
//! Exactly one backend is compiled in, chosen by target. Each exposes the same
//! inherent surface (`BACKEND`, `new`, `seconds_per_tick`, `now`) and is
//! re-exported as `Platform`.

mod scale;

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly",
))]
mod unix;
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly",
))]
pub(crate) use unix::UnixClock as Platform;

#[cfg(target_vendor = "apple")]
mod apple;
#[cfg(target_vendor = "apple")]
pub(crate) use apple::AppleClock as Platform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::WindowsClock as Platform;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly",
    target_vendor = "apple",
    windows,
)))]
compile_error!(
    "gameclock-engine: no monotonic timer backend for this target. \
     Supported: Linux, Android, FreeBSD, NetBSD, OpenBSD, DragonFly, Apple platforms, Windows."
);
