use std::fmt;

use super::Duration;

/// Errors raised while setting up time sources.
///
/// Reading a constructed clock never fails; everything here surfaces at
/// construction or configuration time.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockError {
    /// The platform timer reported an unusable frequency or timebase.
    TimerUnavailable {
        backend: &'static str,
        reason: String,
    },
    /// Frame delta clamps are inverted, negative, or not finite.
    InvalidClamps { min: Duration, max: Duration },
}

impl ClockError {
    pub(crate) fn timer_unavailable(backend: &'static str, reason: impl Into<String>) -> Self {
        Self::TimerUnavailable {
            backend,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimerUnavailable { backend, reason } => {
                write!(f, "{backend} monotonic timer unavailable: {reason}")
            }
            Self::InvalidClamps { min, max } => {
                write!(f, "invalid frame delta clamps: min {min}, max {max}")
            }
        }
    }
}

impl std::error::Error for ClockError {}
