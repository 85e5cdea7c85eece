//! Tracking one logical touch among several concurrent ones.

use super::types::{PointerId, TouchPoint};
use swoosh_ui_graphics::Vector2;

/// Finds the position of the touch with identifier `id`, if present.
///
/// A missing touch is normal (it may have been released in a separate
/// callback); callers skip the event rather than treating it as an error.
pub fn find_touch(touches: &[TouchPoint], id: PointerId) -> Option<Vector2> {
    touches
        .iter()
        .find(|touch| touch.id == id)
        .map(|touch| touch.position)
}

/// Remembers which pointer a gesture follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchSampler {
    tracked: Option<PointerId>,
}

impl TouchSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(&mut self, id: PointerId) {
        self.tracked = Some(id);
    }

    pub fn release(&mut self) -> Option<PointerId> {
        self.tracked.take()
    }

    pub fn tracked(&self) -> Option<PointerId> {
        self.tracked
    }

    /// Position of the tracked touch within `touches`.
    pub fn sample(&self, touches: &[TouchPoint]) -> Option<Vector2> {
        find_touch(touches, self.tracked?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_matching_touch_among_many() {
        let touches = [
            TouchPoint::new(3, 1.0, 1.0),
            TouchPoint::new(7, 20.0, 40.0),
            TouchPoint::new(9, 5.0, 5.0),
        ];
        assert_eq!(find_touch(&touches, 7), Some(Vector2::new(20.0, 40.0)));
    }

    #[test]
    fn missing_touch_is_none() {
        let touches = [TouchPoint::new(3, 1.0, 1.0)];
        assert_eq!(find_touch(&touches, 4), None);
        assert_eq!(find_touch(&[], 4), None);
    }

    #[test]
    fn sampler_without_capture_sees_nothing() {
        let mut sampler = TouchSampler::new();
        let touches = [TouchPoint::new(1, 2.0, 3.0)];
        assert_eq!(sampler.sample(&touches), None);

        sampler.capture(1);
        assert_eq!(sampler.sample(&touches), Some(Vector2::new(2.0, 3.0)));
        assert_eq!(sampler.release(), Some(1));
        assert_eq!(sampler.sample(&touches), None);
    }
}
