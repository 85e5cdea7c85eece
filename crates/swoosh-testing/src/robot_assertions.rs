//! Assertion utilities for robot testing
//!
//! Helpers for checking settle trajectories and event streams recorded by a
//! [`CarouselRobot`](crate::CarouselRobot).

use swoosh_carousel::CarouselEvent;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that every offset is strictly closer to `target` than the one
/// before it, starting from `start`, and that the last one is `target`.
pub fn assert_converges_monotonically(start: f32, offsets: &[f32], target: f32, msg: &str) {
    let mut gap = (start - target).abs();
    for (frame, offset) in offsets.iter().enumerate() {
        let next_gap = (offset - target).abs();
        assert!(
            next_gap < gap || next_gap == 0.0,
            "{}: frame {} moved away from {} ({} -> {})",
            msg,
            frame,
            target,
            gap,
            next_gap
        );
        gap = next_gap;
    }
    assert_eq!(
        offsets.last().copied(),
        Some(target),
        "{}: did not land on {}",
        msg,
        target
    );
}

/// Assert that a settle took at most `max_frames` frames.
pub fn assert_settles_within(offsets: &[f32], max_frames: u32, msg: &str) {
    assert!(
        offsets.len() as u32 <= max_frames,
        "{}: took {} frames, expected at most {}",
        msg,
        offsets.len(),
        max_frames
    );
}

/// Assert that `events` contains `expected` as an ordered subsequence.
pub fn assert_event_order(events: &[CarouselEvent], expected: &[CarouselEvent], msg: &str) {
    let mut remaining = expected.iter().peekable();
    for event in events {
        if remaining.peek() == Some(&event) {
            remaining.next();
        }
    }
    let missing: Vec<_> = remaining.collect();
    assert!(
        missing.is_empty(),
        "{}: events {:?} missing or out of order in {:?}",
        msg,
        missing,
        events
    );
}

/// Number of `IndexChanged` events in `events`.
pub fn count_index_changes(events: &[CarouselEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, CarouselEvent::IndexChanged { .. }))
        .count()
}
