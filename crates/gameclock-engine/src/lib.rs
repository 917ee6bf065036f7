//! Gameclock engine crate.
//!
//! This crate owns the platform timing pieces used by higher layers: a
//! compile-time selected monotonic clock, frame timing on top of it, and
//! logger setup.

pub mod time;

pub mod logging;
