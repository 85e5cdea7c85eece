//! Pure math/data for positions, velocities, axes and sizes in Swoosh
//!
//! This crate contains the 2D primitives shared by the gesture, animation
//! and carousel crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Size, Vector2};
}
