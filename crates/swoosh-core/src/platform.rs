//! Platform abstraction for time.
//!
//! Gesture velocity is measured against a monotonic clock supplied by the
//! host, so the engine can run under a real clock or a simulated one.

use std::cell::Cell;
use web_time::{Duration, Instant};

/// Provides monotonic timing information.
pub trait Clock {
    /// Nanoseconds elapsed since an arbitrary, fixed origin.
    fn now_nanos(&self) -> u64;

    /// Seconds elapsed since `since_nanos`, saturating at zero.
    fn elapsed_secs(&self, since_nanos: u64) -> f32 {
        self.now_nanos().saturating_sub(since_nanos) as f32 / 1_000_000_000.0
    }
}

/// Wall clock backed by `web_time::Instant`, usable on native and WASM.
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    nanos: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(nanos: u64) -> Self {
        Self {
            nanos: Cell::new(nanos),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.nanos
            .set(self.nanos.get().saturating_add(duration.as_nanos() as u64));
    }

    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    pub fn set_nanos(&self, nanos: u64) {
        self.nanos.set(nanos);
    }
}

impl Clock for ManualClock {
    fn now_nanos(&self) -> u64 {
        self.nanos.get()
    }
}
