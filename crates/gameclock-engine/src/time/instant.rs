use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Instant reported by a time source, in seconds since the source's epoch.
///
/// The epoch is arbitrary and per-process. A `TimePoint` is only meaningful
/// relative to another `TimePoint` taken from the same source.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct TimePoint(f64);

/// Signed span of time in seconds.
///
/// Unlike `std::time::Duration` this may be negative, which is what subtracting
/// a later `TimePoint` from an earlier one yields.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Duration(f64);

impl TimePoint {
    #[inline]
    pub const fn from_secs_f64(secs: f64) -> Self {
        Self(secs)
    }

    #[inline]
    pub const fn as_secs_f64(self) -> f64 {
        self.0
    }

    /// Time since the source's epoch.
    #[inline]
    pub const fn since_epoch(self) -> Duration {
        Duration(self.0)
    }

    /// Time elapsed from `earlier` to `self`, or zero if `earlier` is later
    /// or either instant is not finite.
    #[inline]
    pub fn saturating_duration_since(self, earlier: TimePoint) -> Duration {
        let d = self - earlier;
        if d.is_negative() || !d.is_finite() {
            Duration::ZERO
        } else {
            d
        }
    }
}

impl Duration {
    pub const ZERO: Duration = Duration(0.0);

    #[inline]
    pub const fn from_secs_f64(secs: f64) -> Self {
        Self(secs)
    }

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis as f64 / 1e3)
    }

    #[inline]
    pub fn from_micros(micros: u64) -> Self {
        Self(micros as f64 / 1e6)
    }

    #[inline]
    pub const fn as_secs_f64(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f32(self) -> f32 {
        self.0 as f32
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Sub for TimePoint {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: TimePoint) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl Add<Duration> for TimePoint {
    type Output = TimePoint;
    #[inline]
    fn add(self, rhs: Duration) -> TimePoint {
        TimePoint(self.0 + rhs.0)
    }
}

impl Sub<Duration> for TimePoint {
    type Output = TimePoint;
    #[inline]
    fn sub(self, rhs: Duration) -> TimePoint {
        TimePoint(self.0 - rhs.0)
    }
}

impl AddAssign<Duration> for TimePoint {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0;
    }
}

impl SubAssign<Duration> for TimePoint {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        self.0 -= rhs.0;
    }
}

impl Add for Duration {
    type Output = Duration;
    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: Duration) -> Duration {
        Duration(self.0 - rhs.0)
    }
}

impl Mul<f64> for Duration {
    type Output = Duration;
    #[inline]
    fn mul(self, rhs: f64) -> Duration {
        Duration(self.0 * rhs)
    }
}

impl From<std::time::Duration> for Duration {
    fn from(d: std::time::Duration) -> Self {
        Duration(d.as_secs_f64())
    }
}

/// Returned when a `Duration` has no `std::time::Duration` equivalent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutOfRange(pub f64);

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duration of {}s cannot be represented as std::time::Duration",
            self.0
        )
    }
}

impl std::error::Error for OutOfRange {}

impl TryFrom<Duration> for std::time::Duration {
    type Error = OutOfRange;

    fn try_from(d: Duration) -> Result<Self, Self::Error> {
        std::time::Duration::try_from_secs_f64(d.0).map_err(|_| OutOfRange(d.0))
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: f64) -> TimePoint {
        TimePoint::from_secs_f64(s)
    }

    fn d(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn point_minus_point_is_duration() {
        assert_eq!(t(5.5) - t(2.0), d(3.5));
    }

    #[test]
    fn earlier_minus_later_is_negative() {
        assert!((t(1.0) - t(2.0)).is_negative());
    }

    #[test]
    fn point_plus_duration() {
        let mut p = t(1.0) + d(0.5);
        assert_eq!(p, t(1.5));
        p -= d(1.5);
        assert_eq!(p, t(0.0));
    }

    #[test]
    fn saturating_since_clamps_to_zero() {
        assert_eq!(t(1.0).saturating_duration_since(t(3.0)), Duration::ZERO);
        assert_eq!(t(3.0).saturating_duration_since(t(1.0)), d(2.0));
    }

    #[test]
    fn saturating_since_ignores_non_finite() {
        assert_eq!(t(f64::NAN).saturating_duration_since(t(1.0)), Duration::ZERO);
        assert_eq!(t(1.0).saturating_duration_since(t(f64::NAN)), Duration::ZERO);
    }

    #[test]
    fn since_epoch_matches_seconds() {
        assert_eq!(t(42.25).since_epoch().as_secs_f64(), 42.25);
    }

    #[test]
    fn millis_and_micros() {
        assert_eq!(Duration::from_millis(250), d(0.25));
        assert!((Duration::from_micros(100).as_secs_f64() - 0.0001).abs() < 1e-12);
    }

    // ── std conversion ────────────────────────────────────────────────────

    #[test]
    fn converts_to_std_when_positive() {
        let std_d: std::time::Duration = d(1.5).try_into().unwrap();
        assert_eq!(std_d, std::time::Duration::from_millis(1500));
    }

    #[test]
    fn negative_has_no_std_equivalent() {
        let res: Result<std::time::Duration, _> = d(-0.1).try_into();
        assert_eq!(res, Err(OutOfRange(-0.1)));
    }

    #[test]
    fn non_finite_has_no_std_equivalent() {
        let res: Result<std::time::Duration, _> = d(f64::NAN).try_into();
        assert!(res.is_err());
    }

    #[test]
    fn from_std() {
        assert_eq!(Duration::from(std::time::Duration::from_millis(10)), d(0.01));
    }
}
