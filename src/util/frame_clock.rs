use web_time::Instant;

/// Milliseconds-to-simulation-time factor applied to each sample delta.
pub const DEFAULT_TIME_SCALE: f64 = 0.0025;

/// Accumulates animation time from wall-clock frame timestamps.
///
/// The first sample after construction (or [`rebaseline`](Self::rebaseline))
/// only records a baseline, so mount-to-first-frame latency never shows up as
/// a jump. Deltas are applied as-is: a host clock that steps backwards moves
/// `elapsed` backwards by the same scaled amount.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Accumulated simulation time.
    elapsed: f64,
    /// Timestamp (ms) of the previous sample, `None` until the first tick.
    last_sample: Option<f64>,
    /// Scale from milliseconds to simulation time units.
    time_scale: f64,
    /// Epoch for [`advance_now`](Self::advance_now).
    epoch: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

impl FrameClock {
    /// Create a clock at `elapsed = 0` with no baseline.
    #[must_use]
    pub fn new(time_scale: f64) -> Self {
        Self {
            elapsed: 0.0,
            last_sample: None,
            time_scale,
            epoch: Instant::now(),
        }
    }

    /// Feed a frame timestamp in milliseconds and return the updated elapsed
    /// time.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        if let Some(last) = self.last_sample {
            self.elapsed += (now_ms - last) * self.time_scale;
        }
        self.last_sample = Some(now_ms);
        self.elapsed
    }

    /// Advance using milliseconds since this clock was created.
    pub fn advance_now(&mut self) -> f64 {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        self.advance(now_ms)
    }

    /// Forget the baseline but keep accumulated time. The next
    /// [`advance`](Self::advance) becomes a baseline sample again.
    pub fn rebaseline(&mut self) {
        self.last_sample = None;
    }

    /// Change the millisecond scale for subsequent deltas.
    pub fn set_time_scale(&mut self, time_scale: f64) {
        self.time_scale = time_scale;
    }

    /// Return to the freshly constructed state.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.last_sample = None;
    }

    /// Current accumulated simulation time.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whether a baseline sample has been recorded.
    #[must_use]
    pub fn has_baseline(&self) -> bool {
        self.last_sample.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_only_records_baseline() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(5_000.0), 0.0);
        assert!(clock.has_baseline());
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn deltas_are_scaled() {
        let mut clock = FrameClock::default();
        let _ = clock.advance(1_000.0);
        let t = clock.advance(1_400.0);
        assert!((t - 1.0).abs() < 1e-12, "400ms * 0.0025 = 1.0, got {t}");
    }

    #[test]
    fn non_decreasing_for_monotonic_timestamps() {
        let mut clock = FrameClock::default();
        let mut prev = clock.elapsed();
        let mut ts = 0.0;
        for step in [16.6, 0.0, 33.3, 8.0, 0.0, 120.0, 16.7] {
            ts += step;
            let t = clock.advance(ts);
            assert!(t >= prev, "elapsed went backwards: {prev} -> {t}");
            prev = t;
        }
    }

    #[test]
    fn backwards_timestamps_are_not_clamped() {
        let mut clock = FrameClock::default();
        let _ = clock.advance(1_000.0);
        let _ = clock.advance(1_400.0);
        let t = clock.advance(1_000.0);
        assert!(t.abs() < 1e-12);
    }

    #[test]
    fn rebaseline_keeps_elapsed_and_skips_gap() {
        let mut clock = FrameClock::default();
        let _ = clock.advance(0.0);
        let before = clock.advance(400.0);
        clock.rebaseline();
        assert_eq!(clock.advance(60_000.0), before);
        assert!((clock.advance(60_400.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn advance_now_uses_monotonic_epoch() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance_now(), 0.0);
        let a = clock.advance_now();
        let b = clock.advance_now();
        assert!(a >= 0.0 && b >= a);
    }

    #[test]
    fn reset_clears_everything() {
        let mut clock = FrameClock::new(1.0);
        let _ = clock.advance(0.0);
        let _ = clock.advance(10.0);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.has_baseline());
    }
}
