use smallvec::SmallVec;
use swoosh_ui_graphics::Vector2;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A single contact point reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: PointerId,
    pub position: Vector2,
}

impl TouchPoint {
    pub const fn new(id: PointerId, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Vector2::new(x, y),
        }
    }
}

/// Touch event carrying every contact that changed in this callback.
///
/// Multi-finger input batches several touches into one event; consumers pick
/// out the one they track with [`find_touch`](super::find_touch).
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub changed_touches: SmallVec<[TouchPoint; 4]>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            phase,
            changed_touches: touches.into_iter().collect(),
        }
    }

    pub fn single(phase: TouchPhase, id: PointerId, x: f32, y: f32) -> Self {
        Self::new(phase, [TouchPoint::new(id, x, y)])
    }

    pub fn touches(&self) -> &[TouchPoint] {
        &self.changed_touches
    }
}
