//! Robot-style driver for carousel tests
//!
//! The robot owns a carousel engine wired to a [`ManualClock`] and a
//! [`FrameCallbackQueue`], so a test controls both touch timing and frame
//! delivery. Every input step advances the clock by one frame interval,
//! which keeps velocities deterministic.
//!
//! # Example
//!
//! ```
//! use swoosh_testing::CarouselRobot;
//!
//! let mut robot = CarouselRobot::with_cards(3, 100.0, 100.0);
//! robot.swipe((250.0, 50.0), (100.0, 50.0), 10);
//! robot.wait_for_idle();
//! assert_eq!(robot.engine().index(), 1);
//! assert_eq!(robot.engine().offset(), -100.0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use swoosh_carousel::{CarouselConfig, CarouselEngine, CarouselEvent};
use swoosh_core::{Clock, FrameCallbackQueue, ManualClock};
use swoosh_foundation::{PointerId, TouchPoint};
use swoosh_ui_graphics::{Size, Vector2};

/// Interval between simulated input samples and frames (60 Hz).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Upper bound on frames [`CarouselRobot::wait_for_idle`] pumps before
/// declaring the carousel stuck.
pub const MAX_IDLE_FRAMES: usize = 1_000;

/// Programmatic control over a carousel with simulated time.
pub struct CarouselRobot {
    engine: CarouselEngine,
    clock: Rc<ManualClock>,
    frames: FrameCallbackQueue,
    frame_interval: Duration,
    events: Rc<RefCell<Vec<CarouselEvent>>>,
    touch: Option<(PointerId, Vector2)>,
    next_pointer: PointerId,
}

impl CarouselRobot {
    /// Creates a robot around a fresh engine, one card per entry in
    /// `card_sizes`, each already measured.
    pub fn new(config: &CarouselConfig, card_sizes: &[Size]) -> Self {
        let clock = Rc::new(ManualClock::new());
        let frames = FrameCallbackQueue::new();
        let engine = CarouselEngine::new(
            config,
            card_sizes.len(),
            clock.clone(),
            Rc::new(frames.clone()),
        );
        for (index, size) in card_sizes.iter().enumerate() {
            engine.report_size(index, size.width, size.height);
        }

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        engine.on_event(move |event| sink.borrow_mut().push(*event));

        Self {
            engine,
            clock,
            frames,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            events,
            touch: None,
            next_pointer: 1,
        }
    }

    /// Default-configured carousel of `count` equally sized cards.
    pub fn with_cards(count: usize, width: f32, height: f32) -> Self {
        let sizes = vec![Size::new(width, height); count];
        Self::new(&CarouselConfig::default(), &sizes)
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn frames(&self) -> &FrameCallbackQueue {
        &self.frames
    }

    /// Every event the engine emitted so far.
    pub fn events(&self) -> Vec<CarouselEvent> {
        self.events.borrow().clone()
    }

    /// Returns and forgets the events recorded so far.
    pub fn take_events(&mut self) -> Vec<CarouselEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Pointer of the touch the robot is currently holding down.
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.touch.map(|(pointer, _)| pointer)
    }

    /// Advances simulated time without delivering frames.
    pub fn advance_time(&mut self, duration: Duration) {
        self.clock.advance(duration);
    }

    /// Puts a new finger down at `(x, y)`.
    pub fn press(&mut self, x: f32, y: f32) -> PointerId {
        let pointer = self.next_pointer;
        self.next_pointer += 1;
        self.press_with(pointer, x, y);
        pointer
    }

    /// Puts finger `pointer` down at `(x, y)`.
    pub fn press_with(&mut self, pointer: PointerId, x: f32, y: f32) {
        log::trace!("robot: press {pointer} at ({x}, {y})");
        self.engine.touch_start(pointer, x, y);
        self.touch = Some((pointer, Vector2::new(x, y)));
    }

    /// Moves the held finger to `(x, y)` one frame interval later.
    ///
    /// # Panics
    ///
    /// Panics when no finger is down.
    pub fn move_to(&mut self, x: f32, y: f32) {
        let pointer = self.held_pointer("move_to");
        self.clock.advance(self.frame_interval);
        self.engine.touch_move(&[TouchPoint::new(pointer, x, y)]);
        self.touch = Some((pointer, Vector2::new(x, y)));
    }

    /// Moves the held finger to `(x, y)` in `steps` evenly spaced samples.
    pub fn drag_to(&mut self, x: f32, y: f32, steps: usize) {
        let Some((_, from)) = self.touch else {
            panic!("drag_to without a finger down");
        };
        let to = Vector2::new(x, y);
        let steps = steps.max(1);
        for step in 1..=steps {
            let point = from + (to - from) * (step as f32 / steps as f32);
            self.move_to(point.x, point.y);
        }
    }

    /// Lifts the held finger where it is, one frame interval after the
    /// last sample.
    pub fn release(&mut self) {
        let Some((_, at)) = self.touch else {
            panic!("release without a finger down");
        };
        self.release_at(at.x, at.y);
    }

    /// Lifts the held finger at `(x, y)`.
    pub fn release_at(&mut self, x: f32, y: f32) {
        let pointer = self.held_pointer("release_at");
        self.clock.advance(self.frame_interval);
        log::trace!("robot: release {pointer} at ({x}, {y})");
        self.engine.touch_end(&[TouchPoint::new(pointer, x, y)]);
        self.touch = None;
    }

    /// Host-side abort of the held gesture.
    pub fn cancel(&mut self) {
        self.engine.touch_cancel();
        self.touch = None;
    }

    /// Press, drag in `steps` samples and release.
    pub fn swipe(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) -> PointerId {
        let pointer = self.press(from.0, from.1);
        self.drag_to(to.0, to.1, steps);
        self.release();
        pointer
    }

    /// Advances one frame interval and delivers the frame. Returns how many
    /// callbacks ran.
    pub fn advance_frame(&mut self) -> usize {
        self.clock.advance(self.frame_interval);
        self.frames.drain_frame_callbacks(self.clock.now_nanos())
    }

    /// Pumps frames until none are requested. Returns the offset observed
    /// after each frame.
    ///
    /// # Panics
    ///
    /// Panics if the carousel is still requesting frames after
    /// [`MAX_IDLE_FRAMES`].
    pub fn wait_for_idle(&mut self) -> Vec<f32> {
        let mut offsets = Vec::new();
        while self.frames.has_pending_frame_callbacks() {
            assert!(
                offsets.len() < MAX_IDLE_FRAMES,
                "carousel still animating after {MAX_IDLE_FRAMES} frames: {:?}",
                self.engine
            );
            self.advance_frame();
            offsets.push(self.engine.offset());
        }
        offsets
    }

    fn held_pointer(&self, action: &str) -> PointerId {
        match self.touch {
            Some((pointer, _)) => pointer,
            None => panic!("{action} without a finger down"),
        }
    }
}

impl std::fmt::Debug for CarouselRobot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselRobot")
            .field("engine", &self.engine)
            .field("now_nanos", &self.clock.now_nanos())
            .field("touch", &self.touch)
            .finish()
    }
}
