//! Touch-driven paginated carousel engine for Swoosh
//!
//! A [`CarouselEngine`] consumes touch events, locks each gesture to the
//! swipe axis, predicts the resting position of a released swipe, picks the
//! card that becomes current and settles the slider onto it frame by frame.
//! Rendering, card measurement and page-scroll policy stay with the host:
//! it reports card sizes in, reads [`CarouselFrame`]s out, and listens for
//! [`CarouselEvent`]s.

mod config;
mod engine;
mod event;
mod index_selector;
mod model;

pub use config::*;
pub use engine::CarouselEngine;
pub use event::{CarouselEvent, CarouselFrame};
pub use index_selector::{select_index, IndexDecision, IndexThresholds};
pub use model::CarouselModel;

pub use swoosh_foundation::{
    AxisConfig, GesturePhase, PointerId, TouchEvent, TouchPhase, TouchPoint, UnlockedMotion,
};
pub use swoosh_ui_graphics::{Size, Vector2};

pub mod prelude {
    pub use crate::config::CarouselConfig;
    pub use crate::engine::CarouselEngine;
    pub use crate::event::{CarouselEvent, CarouselFrame};
    pub use swoosh_foundation::{AxisConfig, TouchEvent, TouchPhase, TouchPoint, UnlockedMotion};
}
