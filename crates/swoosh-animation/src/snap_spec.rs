//! Frame-stepped snap toward a resting value.
//!
//! Each frame closes a fixed fraction of the remaining gap. The gap shrinks
//! geometrically, so the number of frames needed to get within `epsilon` is
//! bounded by `log(gap/epsilon) / -log(1 - gain)` regardless of wall-clock
//! frame timing.

/// Fraction of the remaining distance covered per frame.
pub const DEFAULT_SNAP_GAIN: f32 = 0.3;

/// Distance under which a snap jumps straight to its target and stops.
pub const DEFAULT_SNAP_EPSILON: f32 = 1.0;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Outcome of a single snap frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapStep {
    /// Still converging; holds the new value.
    Running(f32),
    /// Converged; holds the target exactly.
    Settled(f32),
}

impl SnapStep {
    pub fn value(self) -> f32 {
        match self {
            SnapStep::Running(value) | SnapStep::Settled(value) => value,
        }
    }

    pub fn is_settled(self) -> bool {
        matches!(self, SnapStep::Settled(_))
    }
}

/// Snap animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSpec {
    /// Per-frame gain in `(0, 1]`.
    pub gain: f32,
    /// Convergence distance.
    pub epsilon: f32,
}

impl SnapSpec {
    pub fn new(gain: f32, epsilon: f32) -> Self {
        let gain = if gain.is_finite() && gain > 0.0 && gain <= 1.0 {
            gain
        } else {
            DEFAULT_SNAP_GAIN
        };
        let epsilon = if epsilon.is_finite() && epsilon > 0.0 {
            epsilon
        } else {
            DEFAULT_SNAP_EPSILON
        };
        Self { gain, epsilon }
    }

    /// Advances `current` one frame toward `target`.
    pub fn step(&self, current: f32, target: f32) -> SnapStep {
        let next = current.lerp(&target, self.gain);
        if (target - next).abs() < self.epsilon || !next.is_finite() {
            SnapStep::Settled(target)
        } else {
            SnapStep::Running(next)
        }
    }

    /// Upper bound on the frames needed to settle from `distance` away.
    ///
    /// A non-finite distance settles on the first frame, since [`step`]
    /// lands on the target as soon as the interpolated value is not finite.
    ///
    /// [`step`]: SnapSpec::step
    pub fn max_frames(&self, distance: f32) -> u32 {
        let distance = distance.abs();
        if !distance.is_finite() {
            return 1;
        }
        if distance * (1.0 - self.gain) < self.epsilon {
            return 1;
        }
        if self.gain >= 1.0 {
            return 1;
        }
        let ratio = (distance / self.epsilon).ln() / -(1.0 - self.gain).ln();
        (ratio.ceil() as u32).saturating_add(1)
    }
}

impl Default for SnapSpec {
    fn default() -> Self {
        Self {
            gain: DEFAULT_SNAP_GAIN,
            epsilon: DEFAULT_SNAP_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_closes_fixed_fraction() {
        let spec = SnapSpec::default();
        assert_eq!(spec.step(0.0, -100.0), SnapStep::Running(-30.0));
    }

    #[test]
    fn fixed_point_is_idempotent() {
        let spec = SnapSpec::default();
        assert_eq!(spec.step(-100.0, -100.0), SnapStep::Settled(-100.0));
    }

    #[test]
    fn close_values_snap_exactly() {
        let spec = SnapSpec::default();
        assert_eq!(spec.step(-99.0, -100.0), SnapStep::Settled(-100.0));
    }

    #[test]
    fn converges_within_bound_and_strictly_approaches() {
        let spec = SnapSpec::default();
        let target = -100.0;
        let mut value = 37.5f32;
        let bound = spec.max_frames(target - value);
        let mut frames = 0;
        loop {
            frames += 1;
            let step = spec.step(value, target);
            assert!((target - step.value()).abs() < (target - value).abs());
            value = step.value();
            if step.is_settled() {
                break;
            }
            assert!(frames <= bound, "exceeded bound of {bound} frames");
        }
        assert_eq!(value, target);
        assert!(frames <= bound);
    }

    #[test]
    fn unbounded_distance_settles_in_one_frame() {
        let spec = SnapSpec::default();
        assert_eq!(spec.max_frames(f32::INFINITY), 1);
        assert_eq!(spec.max_frames(f32::NEG_INFINITY), 1);
        assert_eq!(spec.max_frames(f32::NAN), 1);
        assert_eq!(spec.step(f32::NEG_INFINITY, -100.0), SnapStep::Settled(-100.0));
        assert!(spec.max_frames(f32::MAX) > 1);
    }

    #[test]
    fn invalid_spec_values_fall_back() {
        assert_eq!(SnapSpec::new(0.0, -1.0), SnapSpec::default());
        assert_eq!(SnapSpec::new(1.5, f32::NAN), SnapSpec::default());
    }

    #[test]
    fn lerp_interpolates() {
        assert_eq!(2.0f32.lerp(&4.0, 0.5), 3.0);
        assert_eq!(2.0f64.lerp(&4.0, 0.25), 2.5);
    }
}
