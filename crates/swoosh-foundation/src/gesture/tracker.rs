//! Swipe gesture state machine.
//!
//! ```text
//! Idle --begin--> Unlocked --aligned move--> Locked
//!   ^                 |                         |
//!   +------end/cancel-+-------------------------+
//! ```
//!
//! The tracker turns raw touch positions into a signed offset contribution
//! along the swipe axis. Offsets follow the carousel convention: moving the
//! finger along the swipe axis (toward the next card) makes the offset more
//! negative.

use crate::gesture_constants::{AXIS_LOCK_THRESHOLD, MAX_FLING_VELOCITY, POINTER_STOPPED_NANOS};
use crate::input::{PointerId, TouchPoint, TouchSampler};
use swoosh_ui_graphics::Vector2;

/// What the tracker does with motion before the axis lock decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnlockedMotion {
    /// Offset stays put until the gesture commits to the swipe axis.
    #[default]
    Withhold,
    /// Offset follows the finger's projection on the swipe axis right away,
    /// so ambiguous initial motion still gives visible feedback.
    FreePan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Unlocked,
    Locked,
}

/// Live state of the single tracked touch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    pub pointer: PointerId,
    pub start_pos: Vector2,
    pub prev_pos: Vector2,
    pub curr_pos: Vector2,
    /// Instantaneous velocity in pixels per second.
    pub velocity: Vector2,
    /// Velocity projected on the swipe axis, in offset sign convention.
    pub speed: f32,
    pub axis_locked: bool,
    pub last_sample_nanos: u64,
}

impl GestureState {
    fn new(pointer: PointerId, pos: Vector2, now_nanos: u64) -> Self {
        Self {
            pointer,
            start_pos: pos,
            prev_pos: pos,
            curr_pos: pos,
            velocity: Vector2::ZERO,
            speed: 0.0,
            axis_locked: false,
            last_sample_nanos: now_nanos,
        }
    }

    /// Total displacement since the touch went down.
    pub fn total_delta(&self) -> Vector2 {
        self.curr_pos - self.start_pos
    }
}

/// Result of feeding one accepted sample into the tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureUpdate {
    /// Amount to add to the carousel offset.
    pub offset_delta: f32,
    /// The axis lock was committed by this very sample.
    pub newly_locked: bool,
}

/// Summary handed over when the tracked touch lifts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureRelease {
    pub pointer: PointerId,
    /// Offset contribution of the final sample, if the lift position moved.
    pub final_delta: f32,
    /// Signed release speed along the swipe axis (offset convention).
    pub speed: f32,
    pub axis_locked: bool,
}

#[derive(Clone, Debug)]
pub struct GestureTracker {
    swipe_axis: Vector2,
    unlocked_motion: UnlockedMotion,
    lock_threshold: f32,
    max_speed: f32,
    sampler: TouchSampler,
    state: Option<GestureState>,
}

impl GestureTracker {
    pub fn new(swipe_axis: Vector2, unlocked_motion: UnlockedMotion) -> Self {
        Self {
            swipe_axis,
            unlocked_motion,
            lock_threshold: AXIS_LOCK_THRESHOLD,
            max_speed: MAX_FLING_VELOCITY,
            sampler: TouchSampler::new(),
            state: None,
        }
    }

    pub fn with_lock_threshold(mut self, threshold: f32) -> Self {
        self.lock_threshold = threshold;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        if max_speed.is_finite() && max_speed > 0.0 {
            self.max_speed = max_speed;
        }
        self
    }

    pub fn swipe_axis(&self) -> Vector2 {
        self.swipe_axis
    }

    pub fn phase(&self) -> GesturePhase {
        match &self.state {
            None => GesturePhase::Idle,
            Some(state) if state.axis_locked => GesturePhase::Locked,
            Some(_) => GesturePhase::Unlocked,
        }
    }

    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_axis_locked(&self) -> bool {
        self.state.is_some_and(|state| state.axis_locked)
    }

    /// Starts tracking `pointer` at `pos`.
    ///
    /// Returns `false` when a committed (axis-locked) gesture is already
    /// live: an extra finger landing mid-swipe must not steal it. An
    /// uncommitted gesture is simply replaced.
    pub fn begin(&mut self, pointer: PointerId, pos: Vector2, now_nanos: u64) -> bool {
        if self.is_axis_locked() {
            log::trace!("ignoring touch {pointer}: locked gesture in progress");
            return false;
        }
        log::trace!("gesture begin: pointer {pointer} at {pos:?}");
        self.sampler.capture(pointer);
        self.state = Some(GestureState::new(pointer, pos, now_nanos));
        true
    }

    /// Feeds a batch of changed touches. Returns `None` when the tracked
    /// touch is not among them or no gesture is live.
    pub fn update(&mut self, touches: &[TouchPoint], now_nanos: u64) -> Option<GestureUpdate> {
        let pos = self.sampler.sample(touches)?;
        self.update_position(pos, now_nanos)
    }

    /// Feeds the tracked touch's new position directly.
    pub fn update_position(&mut self, pos: Vector2, now_nanos: u64) -> Option<GestureUpdate> {
        let swipe_axis = self.swipe_axis;
        let lock_threshold = self.lock_threshold;
        let max_speed = self.max_speed;
        let unlocked_motion = self.unlocked_motion;
        let Some(state) = self.state.as_mut() else {
            log::warn!("touch move without a live gesture; start event lost?");
            return None;
        };

        state.prev_pos = state.curr_pos;
        state.curr_pos = pos;
        let delta = state.curr_pos - state.prev_pos;

        let mut update = GestureUpdate::default();
        if !state.axis_locked {
            if let Some(direction) = delta.normalized() {
                if direction.dot(swipe_axis).abs() > lock_threshold {
                    state.axis_locked = true;
                    update.newly_locked = true;
                    log::debug!("gesture {} locked to swipe axis", state.pointer);
                }
            }
        }

        let progress = -delta.dot(swipe_axis);
        let elapsed_nanos = now_nanos.saturating_sub(state.last_sample_nanos);
        state.last_sample_nanos = now_nanos;

        if state.axis_locked {
            if elapsed_nanos > 0 {
                let elapsed_secs = elapsed_nanos as f32 / 1_000_000_000.0;
                state.velocity = delta.scale(1.0 / elapsed_secs);
                state.speed = (-state.velocity.dot(swipe_axis)).clamp(-max_speed, max_speed);
            }
            update.offset_delta = progress;
        } else if unlocked_motion == UnlockedMotion::FreePan {
            update.offset_delta = progress;
        }

        log::trace!(
            "gesture sample {pos:?}: delta {delta:?}, offset {:+}, speed {}",
            update.offset_delta,
            state.speed
        );
        Some(update)
    }

    /// Finishes the gesture if the tracked touch is among `touches`.
    pub fn end(&mut self, touches: &[TouchPoint], now_nanos: u64) -> Option<GestureRelease> {
        let pos = self.sampler.sample(touches)?;
        self.end_at(pos, now_nanos)
    }

    /// Finishes the gesture with the tracked touch lifting at `pos`.
    pub fn end_at(&mut self, pos: Vector2, now_nanos: u64) -> Option<GestureRelease> {
        let last = self.state?.curr_pos;
        // A prompt zero-delta lift keeps the last velocity.
        let final_delta = if pos != last {
            self.update_position(pos, now_nanos)
                .map_or(0.0, |update| update.offset_delta)
        } else {
            0.0
        };

        let mut state = self.state.take()?;
        if now_nanos.saturating_sub(state.last_sample_nanos) > POINTER_STOPPED_NANOS {
            log::trace!("gesture {} held still before lifting", state.pointer);
            state.velocity = Vector2::ZERO;
            state.speed = 0.0;
        }
        self.sampler.release();
        log::debug!(
            "gesture {} released: speed {}, locked {}",
            state.pointer,
            state.speed,
            state.axis_locked
        );
        Some(GestureRelease {
            pointer: state.pointer,
            final_delta,
            speed: state.speed,
            axis_locked: state.axis_locked,
        })
    }

    /// Abandons the gesture without producing a release.
    pub fn cancel(&mut self) -> Option<GestureState> {
        self.sampler.release();
        let state = self.state.take();
        if let Some(state) = &state {
            log::debug!("gesture {} cancelled", state.pointer);
        }
        state
    }
}

#[cfg(test)]
#[path = "../tests/gesture_tracker_tests.rs"]
mod tests;
