use anyhow::{Context, Result};

use super::{ClockError, Duration, MonotonicClock, TimePoint, TimeSource};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds, after clamping.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: TimePoint,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Delta-time clamps applied by [`FrameClock::tick`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameClockConfig {
    pub dt_min: Duration,
    pub dt_max: Duration,
}

impl Default for FrameClockConfig {
    /// Clamp rationale:
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum prevents simulation explosions after long stalls
    fn default() -> Self {
        Self {
            dt_min: Duration::from_micros(100), // 0.0001s
            dt_max: Duration::from_millis(250), // 0.25s
        }
    }
}

impl FrameClockConfig {
    pub fn validate(&self) -> Result<(), ClockError> {
        let ok = self.dt_min.is_finite()
            && self.dt_max.is_finite()
            && !self.dt_min.is_negative()
            && self.dt_min <= self.dt_max;

        if ok {
            Ok(())
        } else {
            Err(ClockError::InvalidClamps {
                min: self.dt_min,
                max: self.dt_max,
            })
        }
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// `FrameClock` is designed to be used per window (or per loop) so that multi-window
/// applications do not share delta-time state.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock<S: TimeSource = MonotonicClock> {
    source: S,
    last: TimePoint,
    frame_index: u64,
    config: FrameClockConfig,
}

impl FrameClock<MonotonicClock> {
    /// Creates a clock on the platform timer with default clamps.
    pub fn new() -> Result<Self> {
        let source = MonotonicClock::new()
            .context("failed to initialize monotonic clock")?;
        Ok(Self::with_source(source, FrameClockConfig::default())?)
    }
}

impl<S: TimeSource> FrameClock<S> {
    /// Creates a clock over `source` with custom delta-time clamps.
    pub fn with_source(source: S, config: FrameClockConfig) -> Result<Self, ClockError> {
        config.validate()?;
        let last = source.now();
        Ok(Self {
            source,
            last,
            frame_index: 0,
            config,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> FrameClockConfig {
        self.config
    }

    /// Resets the clock baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = self.source.now();
    }

    /// Unclamped time since the last tick or reset.
    pub fn elapsed(&self) -> Duration {
        self.source.now().saturating_duration_since(self.last)
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = self.source.now();
        let mut dt = now.saturating_duration_since(self.last);

        // Clamp delta time to keep downstream systems stable.
        if dt < self.config.dt_min {
            dt = self.config.dt_min;
        } else if dt > self.config.dt_max {
            log::trace!(
                "frame {}: stall of {dt} clamped to {}",
                self.frame_index,
                self.config.dt_max
            );
            dt = self.config.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self
            .frame_index
            .wrapping_add(1);

        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    fn manual() -> FrameClock<ManualClock> {
        FrameClock::with_source(ManualClock::default(), FrameClockConfig::default())
            .unwrap()
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn default_config_is_valid() {
        assert!(FrameClockConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_clamps_are_rejected() {
        let config = FrameClockConfig {
            dt_min: Duration::from_millis(10),
            dt_max: Duration::from_millis(5),
        };
        let err = FrameClock::with_source(ManualClock::default(), config)
            .unwrap_err();
        assert!(matches!(err, ClockError::InvalidClamps { .. }));
    }

    #[test]
    fn negative_or_nan_clamps_are_rejected() {
        let negative = FrameClockConfig {
            dt_min: Duration::from_secs_f64(-1.0),
            dt_max: Duration::from_millis(5),
        };
        let nan = FrameClockConfig {
            dt_min: Duration::ZERO,
            dt_max: Duration::from_secs_f64(f64::NAN),
        };
        assert!(negative.validate().is_err());
        assert!(nan.validate().is_err());
    }

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn tick_reports_elapsed_time() {
        let mut clock = manual();
        clock.source().advance(Duration::from_millis(16));
        let ft = clock.tick();
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);
        assert_eq!(ft.now, TimePoint::from_secs_f64(0.016));
    }

    #[test]
    fn tick_clamps_to_minimum() {
        let mut clock = manual();
        let ft = clock.tick();
        assert!((ft.dt - 0.0001).abs() < 1e-9);
    }

    #[test]
    fn tick_clamps_to_maximum_after_stall() {
        let mut clock = manual();
        clock.source().advance(Duration::from_secs_f64(5.0));
        assert_eq!(clock.tick().dt, 0.25);
    }

    #[test]
    fn frame_index_increments_per_tick() {
        let mut clock = manual();
        let indices: Vec<u64> = (0..3).map(|_| clock.tick().frame_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    struct NanSource;

    impl TimeSource for NanSource {
        fn now(&self) -> TimePoint {
            TimePoint::from_secs_f64(f64::NAN)
        }
    }

    #[test]
    fn non_finite_reading_clamps_to_minimum() {
        let mut clock = FrameClock::with_source(NanSource, FrameClockConfig::default())
            .unwrap();
        let ft = clock.tick();
        assert!(ft.dt.is_finite());
        assert!((ft.dt - 0.0001).abs() < 1e-9);
    }

    // ── reset / elapsed ───────────────────────────────────────────────────

    #[test]
    fn reset_rebases_without_counting_a_frame() {
        let mut clock = manual();
        clock.source().advance(Duration::from_secs_f64(3.0));
        clock.reset();
        clock.source().advance(Duration::from_millis(20));
        let ft = clock.tick();
        assert_eq!(ft.frame_index, 0);
        assert!((ft.dt - 0.020).abs() < 1e-6);
    }

    #[test]
    fn elapsed_is_unclamped() {
        let clock = manual();
        clock.source().advance(Duration::from_secs_f64(2.0));
        assert_eq!(clock.elapsed(), Duration::from_secs_f64(2.0));
    }
}
