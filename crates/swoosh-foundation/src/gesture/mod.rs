mod tracker;

pub use tracker::{
    GesturePhase, GestureRelease, GestureState, GestureTracker, GestureUpdate, UnlockedMotion,
};
