//! Touch input, swipe axes and gesture tracking for Swoosh

pub mod axis;
pub mod gesture;
pub mod gesture_constants;
pub mod input;

pub use axis::{parse_axis_token, resolve_axis, AxisConfig};
pub use gesture::{
    GesturePhase, GestureRelease, GestureState, GestureTracker, GestureUpdate, UnlockedMotion,
};
pub use input::{find_touch, PointerId, TouchEvent, TouchPhase, TouchPoint, TouchSampler};
pub use swoosh_ui_graphics::{Size, Vector2};

pub mod prelude {
    pub use crate::axis::{resolve_axis, AxisConfig};
    pub use crate::gesture::{GesturePhase, GestureTracker, UnlockedMotion};
    pub use crate::input::{PointerId, TouchEvent, TouchPhase, TouchPoint};
}
