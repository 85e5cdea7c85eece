//! Decay animation specification for swipe release.
//!
//! Post-release motion is modelled as exponential velocity decay,
//! `dv/dt = -k·v`, which integrates to
//!
//! ```text
//! v(t) = v0·e^(-k·t)
//! x(t) = x0 + (v0/k)·(1 - e^(-k·t))
//! ```
//!
//! The motion is considered finished once `|v|` drops below a fixed stop
//! velocity `j`, at `tf = (1/k)·ln(v0/j)`. Everything is closed form, so the
//! resting position is known the instant the finger lifts.

/// Velocity (units per second) below which a decay is considered finished.
pub const DEFAULT_STOP_VELOCITY: f32 = 0.1;

/// Sensitivity used when none (or a nonsensical one) is configured.
pub const DEFAULT_SENSITIVITY: f32 = 1.0;

/// Trait for decay animation specifications.
///
/// A decay animation has no fixed target - it starts with a velocity and
/// decelerates to zero. The final position depends on the initial velocity.
pub trait FloatDecayAnimationSpec {
    /// Velocity threshold below which animation is considered finished.
    fn abs_velocity_threshold(&self) -> f32;

    /// Get position at a given time.
    fn get_value_from_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32;

    /// Get velocity at a given time.
    fn get_velocity_from_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32;

    /// Get total animation duration in nanoseconds.
    fn get_duration_nanos(&self, initial_value: f32, initial_velocity: f32) -> i64;

    /// Get the target value (final position) of the animation.
    fn get_target_value(&self, initial_value: f32, initial_velocity: f32) -> f32;
}

/// Exponential (friction) decay with a finite stop time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecaySpec {
    decay_rate: f32,
    stop_velocity: f32,
}

impl ExponentialDecaySpec {
    /// Creates a spec from a sensitivity; the decay rate is `1 / sensitivity`.
    ///
    /// Non-finite or non-positive sensitivities fall back to
    /// [`DEFAULT_SENSITIVITY`].
    pub fn new(sensitivity: f32) -> Self {
        let sensitivity = if sensitivity.is_finite() && sensitivity > 0.0 {
            sensitivity
        } else {
            log::debug!("ignoring sensitivity {sensitivity}, using {DEFAULT_SENSITIVITY}");
            DEFAULT_SENSITIVITY
        };
        Self::with_decay_rate(1.0 / sensitivity)
    }

    /// Creates a spec with an explicit decay rate `k`.
    pub fn with_decay_rate(decay_rate: f32) -> Self {
        let decay_rate = if decay_rate.is_finite() && decay_rate > 0.0 {
            decay_rate
        } else {
            1.0 / DEFAULT_SENSITIVITY
        };
        Self {
            decay_rate,
            stop_velocity: DEFAULT_STOP_VELOCITY,
        }
    }

    /// Overrides the stop velocity `j`.
    pub fn with_stop_velocity(mut self, stop_velocity: f32) -> Self {
        if stop_velocity.is_finite() && stop_velocity > 0.0 {
            self.stop_velocity = stop_velocity;
        }
        self
    }

    pub fn decay_rate(&self) -> f32 {
        self.decay_rate
    }

    pub fn stop_velocity(&self) -> f32 {
        self.stop_velocity
    }

    /// Time in seconds until `|v|` falls to the stop velocity.
    ///
    /// Zero when the release speed is already at or below the stop velocity,
    /// which also covers `v0 == 0` without ever taking `ln(0)`.
    pub fn stop_time_secs(&self, initial_velocity: f32) -> f32 {
        let v0 = initial_velocity.abs();
        if v0.is_nan() || v0 <= self.stop_velocity {
            return 0.0;
        }
        (v0 / self.stop_velocity).ln() / self.decay_rate
    }

    /// Signed distance covered between release and `t` seconds later.
    fn distance_at(&self, t: f32, initial_velocity: f32) -> f32 {
        let v0 = initial_velocity.abs();
        if v0 == 0.0 || t <= 0.0 {
            return 0.0;
        }
        let travelled = (v0 / self.decay_rate) * (1.0 - (-self.decay_rate * t).exp());
        travelled * initial_velocity.signum()
    }

    fn clamp_play_time(&self, play_time_nanos: i64, initial_velocity: f32) -> f32 {
        let t = play_time_nanos.max(0) as f32 / 1_000_000_000.0;
        t.min(self.stop_time_secs(initial_velocity))
    }
}

impl Default for ExponentialDecaySpec {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY)
    }
}

impl FloatDecayAnimationSpec for ExponentialDecaySpec {
    fn abs_velocity_threshold(&self) -> f32 {
        self.stop_velocity
    }

    fn get_value_from_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32 {
        let t = self.clamp_play_time(play_time_nanos, initial_velocity);
        initial_value + self.distance_at(t, initial_velocity)
    }

    fn get_velocity_from_nanos(
        &self,
        play_time_nanos: i64,
        _initial_value: f32,
        initial_velocity: f32,
    ) -> f32 {
        let t = play_time_nanos.max(0) as f32 / 1_000_000_000.0;
        if t >= self.stop_time_secs(initial_velocity) {
            return 0.0;
        }
        initial_velocity * (-self.decay_rate * t).exp()
    }

    fn get_duration_nanos(&self, _initial_value: f32, initial_velocity: f32) -> i64 {
        (self.stop_time_secs(initial_velocity) as f64 * 1_000_000_000.0) as i64
    }

    fn get_target_value(&self, initial_value: f32, initial_velocity: f32) -> f32 {
        if initial_velocity == 0.0 || !initial_velocity.is_finite() {
            return initial_value;
        }
        let tf = self.stop_time_secs(initial_velocity);
        initial_value + self.distance_at(tf, initial_velocity)
    }
}
