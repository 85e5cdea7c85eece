//! Shared gesture constants for consistent touch handling.
//!
//! Values are in logical pixels (and pixels per second for velocities).

/// Minimum `|cos|` between a movement delta and the swipe axis for the
/// gesture to commit to that axis.
///
/// 0.9 corresponds to roughly 25 degrees either side of the axis (or of its
/// opposite). Anything steeper is treated as incidental motion, typically a
/// page scroll, and left alone.
pub const AXIS_LOCK_THRESHOLD: f32 = 0.9;

/// Maximum release speed in logical pixels per second.
///
/// Matches Android's default maximum fling velocity on a baseline density.
/// Speeds above this are clamped before the deceleration model runs.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Time after the last movement sample beyond which a lifting finger is
/// considered to have stopped, in nanoseconds.
///
/// Matches Android's velocity tracker horizon: a finger held still for
/// longer than this before lifting releases with zero speed.
pub const POINTER_STOPPED_NANOS: u64 = 100_000_000;
