//! Observable output of the engine.

use swoosh_foundation::{PointerId, Vector2};

/// Notifications for the host.
///
/// `AxisLocked`/`AxisReleased` bracket the part of a gesture the carousel
/// owns; hosts suppress page scrolling in between. `IndexChanged` is where a
/// host would, for example, scroll the page back to the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    GestureStarted { pointer: PointerId },
    AxisLocked { pointer: PointerId },
    AxisReleased { pointer: PointerId },
    IndexChanged { previous: usize, current: usize },
    Settled { index: usize, offset: f32 },
}

/// Snapshot for a rendering layer, taken once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselFrame {
    pub index: usize,
    pub offset: f32,
    /// Slider translation: the offset rendered along the move axis.
    pub translation: Vector2,
}

impl CarouselFrame {
    pub(crate) fn new(index: usize, offset: f32, move_axis: Vector2) -> Self {
        Self {
            index,
            offset,
            translation: move_axis * -offset,
        }
    }
}
