//! Core runtime capabilities for Swoosh
//!
//! The carousel engine never talks to a host event loop directly. It asks a
//! [`FrameScheduler`] for the next frame and reads time from a [`Clock`], so
//! hosts plug in their own primitives and tests drive both by hand.

mod frame_clock;
mod frame_queue;
mod platform;

pub use frame_clock::*;
pub use frame_queue::*;
pub use platform::*;

/// Identifier handed out by a [`FrameScheduler`] for a pending callback.
pub type FrameCallbackId = u64;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock, FrameScheduler};
    pub use crate::frame_queue::FrameCallbackQueue;
    pub use crate::platform::{Clock, ManualClock, StdClock};
}
