//! Time-based value animation
//!
//! A [`ValueAnimator`] moves one `f32` from a start value to a target over a
//! fixed [`Duration`], shaped by an [`Interpolator`]. Time is supplied by the
//! caller as [`Instant`]s so the animator works with any clock source.

use embassy_time::{Duration, Instant};

/// Shape of an animation curve over normalized time `t` in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolator {
    Linear,
    /// Slow start, fast middle, slow end: `0.5 - cos(pi t) / 2`
    AccelerateDecelerate,
    /// Fast start easing into the target: `1 - (1 - t)^2`
    Decelerate,
}

impl Interpolator {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Interpolator::Linear => t,
            Interpolator::AccelerateDecelerate => {
                0.5 - libm::cosf(core::f32::consts::PI * t) / 2.0
            }
            Interpolator::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Animates a single value; idle animators hold their last value
#[derive(Debug, Clone, Copy)]
pub struct ValueAnimator {
    value: f32,
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    interpolator: Interpolator,
    running: bool,
}

impl ValueAnimator {
    /// Idle animator resting at `value`
    pub fn new(value: f32) -> Self {
        Self {
            value,
            from: value,
            to: value,
            start: Instant::from_ticks(0),
            duration: Duration::from_ticks(0),
            interpolator: Interpolator::Linear,
            running: false,
        }
    }

    /// Start animating from the current value towards `to`.
    ///
    /// Replaces any animation already in flight.
    pub fn animate_to(
        &mut self,
        to: f32,
        now: Instant,
        duration: Duration,
        interpolator: Interpolator,
    ) {
        self.from = self.value;
        self.to = to;
        self.start = now;
        self.duration = duration;
        self.interpolator = interpolator;
        self.running = true;
    }

    /// Jump straight to `value`, cancelling any animation.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.from = value;
        self.to = value;
        self.running = false;
    }

    /// Advance to `now`. Returns true if the value changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }

        let progress = self.progress(now);
        let previous = self.value;
        self.value = self.from + (self.to - self.from) * self.interpolator.apply(progress);

        if progress >= 1.0 {
            self.value = self.to;
            self.running = false;
        }

        self.value != previous
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn progress(&self, now: Instant) -> f32 {
        let total = self.duration.as_micros();
        if total == 0 {
            return 1.0;
        }

        let elapsed = now
            .checked_duration_since(self.start)
            .map(|d| d.as_micros())
            .unwrap_or(0);

        (elapsed as f32 / total as f32).min(1.0)
    }
}
