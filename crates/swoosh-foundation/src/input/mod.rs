pub mod sampler;
pub mod types;

pub use sampler::{find_touch, TouchSampler};
pub use types::{PointerId, TouchEvent, TouchPhase, TouchPoint};
