//! Time subsystem.
//!
//! Provides a monotonic clock over the platform's high-resolution timer and
//! frame timing built on top of it.
//! Intended usage:
//! - construct one `MonotonicClock` (or use `MonotonicClock::global()`)
//! - one `FrameClock` per window (or per render loop)
//! - call `tick()` once per presented frame to obtain `FrameTime`
//!
//! The timer backend is chosen at compile time. Building for a target without
//! a backend is a compile error.

mod backend;
mod clock;
mod error;
mod frame_clock;
mod instant;
mod source;

pub use clock::MonotonicClock;
pub use error::ClockError;
pub use frame_clock::{FrameClock, FrameClockConfig, FrameTime};
pub use instant::{Duration, OutOfRange, TimePoint};
pub use source::{ManualClock, TimeSource};
