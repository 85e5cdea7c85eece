//! Animation math for Swoosh
//!
//! - [`ExponentialDecaySpec`]: closed-form fling deceleration, used to predict
//!   where a released swipe would come to rest.
//! - [`SnapSpec`]: per-frame exponential interpolation toward a resting offset.

mod decay_spec;
mod snap_spec;

pub use decay_spec::*;
pub use snap_spec::*;

pub mod prelude {
    pub use crate::decay_spec::{ExponentialDecaySpec, FloatDecayAnimationSpec};
    pub use crate::snap_spec::{Lerp, SnapSpec, SnapStep};
}
