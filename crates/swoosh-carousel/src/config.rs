//! Carousel configuration.

use swoosh_animation::{ExponentialDecaySpec, SnapSpec, DEFAULT_SENSITIVITY, DEFAULT_STOP_VELOCITY};
use swoosh_foundation::gesture_constants::{AXIS_LOCK_THRESHOLD, MAX_FLING_VELOCITY};
use swoosh_foundation::{resolve_axis, AxisConfig, UnlockedMotion, Vector2};

/// Swipe axis used when none is configured: dragging left advances.
pub const DEFAULT_SWIPE_AXIS: Vector2 = Vector2::NEGATIVE_X;

/// Fraction of the current card's extent the predicted resting offset has to
/// travel past the current target before the index changes.
pub const DEFAULT_PAGE_THRESHOLD: f32 = 0.5;

/// Host-facing configuration. Every field is optional in spirit: the
/// defaults give a horizontal carousel that advances on a leftward swipe.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Direction a finger travels to advance. Defaults to `x-`.
    pub swipe_axis: Option<AxisConfig>,
    /// Direction the slider is rendered along. Defaults to the swipe axis.
    pub move_axis: Option<AxisConfig>,
    /// Deceleration sensitivity; the decay rate is its inverse.
    pub sensitivity: f32,
    /// Release speed at which the deceleration model considers motion over.
    pub stop_velocity: f32,
    /// Release speeds are clamped to this magnitude.
    pub max_release_speed: f32,
    /// `|cos|` between motion and swipe axis required to lock.
    pub lock_threshold: f32,
    pub unlocked_motion: UnlockedMotion,
    pub page_threshold: f32,
    pub snap: SnapSpec,
}

impl CarouselConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_swipe_axis(mut self, axis: impl Into<AxisConfig>) -> Self {
        self.swipe_axis = Some(axis.into());
        self
    }

    pub fn with_move_axis(mut self, axis: impl Into<AxisConfig>) -> Self {
        self.move_axis = Some(axis.into());
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_stop_velocity(mut self, stop_velocity: f32) -> Self {
        self.stop_velocity = stop_velocity;
        self
    }

    pub fn with_max_release_speed(mut self, max_release_speed: f32) -> Self {
        self.max_release_speed = max_release_speed;
        self
    }

    pub fn with_lock_threshold(mut self, lock_threshold: f32) -> Self {
        self.lock_threshold = lock_threshold;
        self
    }

    pub fn with_unlocked_motion(mut self, unlocked_motion: UnlockedMotion) -> Self {
        self.unlocked_motion = unlocked_motion;
        self
    }

    pub fn with_page_threshold(mut self, page_threshold: f32) -> Self {
        self.page_threshold = page_threshold;
        self
    }

    pub fn with_snap(mut self, snap: SnapSpec) -> Self {
        self.snap = snap;
        self
    }

    /// Resolves axes and sanitises numbers. Never fails; anything unusable
    /// falls back to its default.
    pub fn resolve(&self) -> ResolvedConfig {
        let swipe_axis = resolve_axis(self.swipe_axis.as_ref(), DEFAULT_SWIPE_AXIS);
        let move_axis = resolve_axis(self.move_axis.as_ref(), swipe_axis);
        let page_threshold = if self.page_threshold.is_finite() && self.page_threshold >= 0.0 {
            self.page_threshold
        } else {
            DEFAULT_PAGE_THRESHOLD
        };
        let lock_threshold = if self.lock_threshold.is_finite() {
            self.lock_threshold.clamp(0.0, 1.0)
        } else {
            AXIS_LOCK_THRESHOLD
        };
        ResolvedConfig {
            swipe_axis,
            move_axis,
            decay: ExponentialDecaySpec::new(self.sensitivity)
                .with_stop_velocity(self.stop_velocity),
            max_release_speed: self.max_release_speed,
            lock_threshold,
            unlocked_motion: self.unlocked_motion,
            page_threshold,
            snap: SnapSpec::new(self.snap.gain, self.snap.epsilon),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_axis: None,
            move_axis: None,
            sensitivity: DEFAULT_SENSITIVITY,
            stop_velocity: DEFAULT_STOP_VELOCITY,
            max_release_speed: MAX_FLING_VELOCITY,
            lock_threshold: AXIS_LOCK_THRESHOLD,
            unlocked_motion: UnlockedMotion::default(),
            page_threshold: DEFAULT_PAGE_THRESHOLD,
            snap: SnapSpec::default(),
        }
    }
}

/// Configuration after axis resolution, as the engine uses it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub swipe_axis: Vector2,
    pub move_axis: Vector2,
    pub decay: ExponentialDecaySpec,
    pub max_release_speed: f32,
    pub lock_threshold: f32,
    pub unlocked_motion: UnlockedMotion,
    pub page_threshold: f32,
    pub snap: SnapSpec,
}
