//! The carousel engine: touch input in, offset and index out.
//!
//! The engine owns the [`CarouselModel`] and the single live gesture. On
//! release it predicts where a free deceleration would come to rest, lets
//! the index selector pick the new card, then settles the offset toward that
//! card one frame at a time through the injected [`FrameScheduler`].
//!
//! All entry points run on the host's event-loop thread. At most one frame
//! registration is outstanding: starting a gesture or scheduling a new
//! settle cancels the previous one first.

use crate::config::{CarouselConfig, ResolvedConfig};
use crate::event::{CarouselEvent, CarouselFrame};
use crate::index_selector::select_index;
use crate::model::CarouselModel;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use swoosh_animation::{FloatDecayAnimationSpec, SnapStep};
use swoosh_core::{Clock, FrameCallbackRegistration, FrameClock, FrameScheduler, StdClock};
use swoosh_foundation::{
    GesturePhase, GestureTracker, PointerId, TouchEvent, TouchPhase, TouchPoint,
};
use swoosh_ui_graphics::{Size, Vector2};

type Listener = Box<dyn FnMut(&CarouselEvent)>;
type Events = SmallVec<[CarouselEvent; 2]>;

/// Handle to a carousel. Clones share the same carousel.
#[derive(Clone)]
pub struct CarouselEngine {
    shared: Rc<Shared>,
}

struct Shared {
    state: RefCell<EngineState>,
    listeners: RefCell<Vec<Listener>>,
    staged_listeners: RefCell<Vec<Listener>>,
    pending_events: RefCell<VecDeque<CarouselEvent>>,
}

struct EngineState {
    config: ResolvedConfig,
    model: CarouselModel,
    tracker: GestureTracker,
    clock: Rc<dyn Clock>,
    frame_clock: FrameClock,
    settle: Option<FrameCallbackRegistration>,
    settle_frames: u32,
}

impl EngineState {
    fn target_offset(&self) -> f32 {
        self.model.target_offset(self.config.swipe_axis)
    }

    fn cancel_settle(&mut self) -> bool {
        match self.settle.take() {
            Some(registration) => {
                registration.cancel();
                true
            }
            None => false,
        }
    }

    fn change_index(&mut self, index: usize, events: &mut Events) {
        let previous = self.model.index();
        if index == previous {
            return;
        }
        self.model.set_index(index);
        log::debug!("carousel index {previous} -> {index}");
        events.push(CarouselEvent::IndexChanged {
            previous,
            current: index,
        });
    }

    /// Runs the deceleration model and index selection for a release at the
    /// current offset with the given signed speed.
    fn select_after_release(&mut self, speed: f32, events: &mut Events) {
        let axis = self.config.swipe_axis;
        let offset = self.model.offset();
        let resting = self.config.decay.get_target_value(offset, speed);
        let index = self.model.index();
        let next = select_index(
            resting,
            index,
            self.model.num_cards(),
            self.model.target_offset(axis),
            self.model.card_extent(index, axis),
            self.config.page_threshold,
        );
        log::debug!("release at {offset} with speed {speed}: resting {resting}, card {next}");
        self.change_index(next, events);
    }

    fn abandon_gesture(&mut self, events: &mut Events) -> bool {
        match self.tracker.cancel() {
            Some(gesture) => {
                if gesture.axis_locked {
                    events.push(CarouselEvent::AxisReleased {
                        pointer: gesture.pointer,
                    });
                }
                true
            }
            None => false,
        }
    }
}

impl CarouselEngine {
    pub fn new(
        config: &CarouselConfig,
        num_cards: usize,
        clock: Rc<dyn Clock>,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Self {
        let config = config.resolve();
        let tracker = GestureTracker::new(config.swipe_axis, config.unlocked_motion)
            .with_lock_threshold(config.lock_threshold)
            .with_max_speed(config.max_release_speed);
        let state = EngineState {
            config,
            model: CarouselModel::new(num_cards),
            tracker,
            clock,
            frame_clock: FrameClock::new(scheduler),
            settle: None,
            settle_frames: 0,
        };
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
                staged_listeners: RefCell::new(Vec::new()),
                pending_events: RefCell::new(VecDeque::new()),
            }),
        }
    }

    /// Creates an engine timed by the wall clock.
    pub fn with_std_clock(
        config: &CarouselConfig,
        num_cards: usize,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Self {
        Self::new(config, num_cards, Rc::new(StdClock::new()), scheduler)
    }

    /// Registers a listener for [`CarouselEvent`]s.
    ///
    /// Events are delivered after the engine has finished updating, so
    /// listeners may read from and drive the engine.
    pub fn on_event(&self, listener: impl FnMut(&CarouselEvent) + 'static) {
        let listener: Listener = Box::new(listener);
        match self.shared.listeners.try_borrow_mut() {
            Ok(mut listeners) => listeners.push(listener),
            Err(_) => self.shared.staged_listeners.borrow_mut().push(listener),
        }
    }

    pub fn config(&self) -> ResolvedConfig {
        self.shared.state.borrow().config
    }

    pub fn index(&self) -> usize {
        self.shared.state.borrow().model.index()
    }

    pub fn num_cards(&self) -> usize {
        self.shared.state.borrow().model.num_cards()
    }

    pub fn offset(&self) -> f32 {
        self.shared.state.borrow().model.offset()
    }

    /// Resting offset of the current card.
    pub fn target_offset(&self) -> f32 {
        self.shared.state.borrow().target_offset()
    }

    pub fn card_size(&self, index: usize) -> Size {
        self.shared.state.borrow().model.card_size(index)
    }

    pub fn swipe_axis(&self) -> Vector2 {
        self.shared.state.borrow().config.swipe_axis
    }

    pub fn move_axis(&self) -> Vector2 {
        self.shared.state.borrow().config.move_axis
    }

    /// Snapshot of everything a rendering layer needs.
    pub fn frame(&self) -> CarouselFrame {
        let state = self.shared.state.borrow();
        CarouselFrame::new(
            state.model.index(),
            state.model.offset(),
            state.config.move_axis,
        )
    }

    pub fn model(&self) -> CarouselModel {
        self.shared.state.borrow().model.clone()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.shared.state.borrow().tracker.phase()
    }

    pub fn is_tracking(&self) -> bool {
        self.shared.state.borrow().tracker.is_active()
    }

    pub fn is_axis_locked(&self) -> bool {
        self.shared.state.borrow().tracker.is_axis_locked()
    }

    pub fn is_settling(&self) -> bool {
        self.shared.state.borrow().settle.is_some()
    }

    /// Frames run by the current (or most recent) settle animation.
    pub fn settle_frames(&self) -> u32 {
        self.shared.state.borrow().settle_frames
    }

    /// Records the rendered size of card `index`.
    ///
    /// When the carousel is at rest and the report moves the current card's
    /// resting offset, the offset settles onto the new target.
    pub fn report_size(&self, index: usize, width: f32, height: f32) {
        let resettle = {
            let mut state = self.shared.state.borrow_mut();
            if !state.model.report_size(index, Size::new(width, height)) {
                return;
            }
            log::trace!("card {index} measured {width}x{height}");
            !state.tracker.is_active()
                && state.settle.is_none()
                && state.model.offset() != state.target_offset()
        };
        if resettle {
            let mut events = Events::new();
            Self::schedule_settle(&self.shared, &mut events);
            Self::emit(&self.shared, events);
        }
    }

    /// Changes the number of cards, clamping the current index.
    pub fn set_num_cards(&self, num_cards: usize) {
        let mut events = Events::new();
        let resettle = {
            let mut state = self.shared.state.borrow_mut();
            let previous = state.model.index();
            state.model.set_num_cards(num_cards);
            let current = state.model.index();
            if current != previous {
                events.push(CarouselEvent::IndexChanged { previous, current });
            }
            current != previous && !state.tracker.is_active()
        };
        if resettle {
            Self::schedule_settle(&self.shared, &mut events);
        }
        Self::emit(&self.shared, events);
    }

    /// Makes `index` (clamped) the current card and settles onto it,
    /// abandoning any gesture in progress.
    pub fn go_to(&self, index: usize) {
        let mut events = Events::new();
        {
            let mut state = self.shared.state.borrow_mut();
            state.abandon_gesture(&mut events);
            let index = index.min(state.model.last_index());
            state.change_index(index, &mut events);
        }
        Self::schedule_settle(&self.shared, &mut events);
        Self::emit(&self.shared, events);
    }

    /// A touch went down.
    ///
    /// Always stops a running settle so only the gesture writes the offset.
    pub fn touch_start(&self, pointer: PointerId, x: f32, y: f32) {
        let mut events = Events::new();
        {
            let mut state = self.shared.state.borrow_mut();
            if state.cancel_settle() {
                log::debug!("settle interrupted by touch {pointer}");
            }
            let now = state.clock.now_nanos();
            if state.tracker.begin(pointer, Vector2::new(x, y), now) {
                events.push(CarouselEvent::GestureStarted { pointer });
            }
        }
        Self::emit(&self.shared, events);
    }

    /// Touches moved. Events that do not include the tracked touch, or that
    /// arrive with no gesture in progress, change nothing.
    pub fn touch_move(&self, touches: &[TouchPoint]) {
        let mut events = Events::new();
        {
            let mut state = self.shared.state.borrow_mut();
            let now = state.clock.now_nanos();
            let Some(update) = state.tracker.update(touches, now) else {
                log::trace!("touch move ignored: tracked touch not present");
                return;
            };
            state.model.add_offset(update.offset_delta);
            if update.newly_locked {
                if let Some(gesture) = state.tracker.state() {
                    events.push(CarouselEvent::AxisLocked {
                        pointer: gesture.pointer,
                    });
                }
            }
        }
        Self::emit(&self.shared, events);
    }

    /// Touches lifted. Completes the gesture if the tracked touch is among
    /// them, then settles toward the selected card.
    pub fn touch_end(&self, touches: &[TouchPoint]) {
        let mut events = Events::new();
        {
            let mut state = self.shared.state.borrow_mut();
            let now = state.clock.now_nanos();
            let Some(release) = state.tracker.end(touches, now) else {
                log::trace!("touch end ignored: tracked touch not present");
                return;
            };
            state.model.add_offset(release.final_delta);
            if release.axis_locked {
                events.push(CarouselEvent::AxisReleased {
                    pointer: release.pointer,
                });
            }
            state.select_after_release(release.speed, &mut events);
        }
        Self::schedule_settle(&self.shared, &mut events);
        Self::emit(&self.shared, events);
    }

    /// The host aborted the gesture. The index stays; the offset settles
    /// back onto the current card.
    pub fn touch_cancel(&self) {
        let mut events = Events::new();
        {
            let mut state = self.shared.state.borrow_mut();
            if !state.abandon_gesture(&mut events) {
                return;
            }
        }
        Self::schedule_settle(&self.shared, &mut events);
        Self::emit(&self.shared, events);
    }

    /// Routes a batched host event to the matching handler.
    pub fn handle_touch_event(&self, event: &TouchEvent) {
        match event.phase {
            TouchPhase::Start => {
                if let Some(touch) = event.touches().first() {
                    self.touch_start(touch.id, touch.position.x, touch.position.y);
                }
            }
            TouchPhase::Move => self.touch_move(event.touches()),
            TouchPhase::End => self.touch_end(event.touches()),
            TouchPhase::Cancel => {
                let tracked = self
                    .shared
                    .state
                    .borrow()
                    .tracker
                    .state()
                    .map(|gesture| gesture.pointer);
                let affects_tracked = event.touches().is_empty()
                    || tracked.is_some_and(|id| event.touches().iter().any(|t| t.id == id));
                if affects_tracked {
                    self.touch_cancel();
                }
            }
        }
    }

    fn schedule_settle(shared: &Rc<Shared>, events: &mut Events) {
        let frame_clock = {
            let mut state = shared.state.borrow_mut();
            state.cancel_settle();
            state.settle_frames = 0;
            state.frame_clock.clone()
        };
        Self::request_frame(shared, &frame_clock, events);
    }

    fn request_frame(shared: &Rc<Shared>, frame_clock: &FrameClock, events: &mut Events) {
        let weak = Rc::downgrade(shared);
        let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
            if let Some(shared) = weak.upgrade() {
                Self::on_frame(&shared, frame_time_nanos);
            }
        });

        let mut state = shared.state.borrow_mut();
        debug_assert!(
            state.settle.is_none(),
            "a settle frame is already outstanding"
        );
        if registration.is_active() {
            state.settle = Some(registration);
        } else {
            // No frames available: land on the target immediately.
            let target = state.target_offset();
            state.model.set_offset(target);
            events.push(CarouselEvent::Settled {
                index: state.model.index(),
                offset: target,
            });
        }
    }

    fn on_frame(shared: &Rc<Shared>, frame_time_nanos: u64) {
        let mut events = Events::new();
        let schedule_next = {
            let mut state = shared.state.borrow_mut();
            if state.settle.take().is_none() {
                return;
            }
            let target = state.target_offset();
            let step = state.config.snap.step(state.model.offset(), target);
            state.model.set_offset(step.value());
            state.settle_frames += 1;
            match step {
                SnapStep::Running(offset) => {
                    log::trace!("settle frame at {frame_time_nanos}: offset {offset} -> {target}");
                    true
                }
                SnapStep::Settled(offset) => {
                    let index = state.model.index();
                    log::debug!(
                        "settled on card {index} at {offset} after {} frames",
                        state.settle_frames
                    );
                    events.push(CarouselEvent::Settled { index, offset });
                    false
                }
            }
        };

        if schedule_next {
            let frame_clock = shared.state.borrow().frame_clock.clone();
            Self::request_frame(shared, &frame_clock, &mut events);
        }
        Self::emit(shared, events);
    }

    fn emit(shared: &Rc<Shared>, events: Events) {
        if events.is_empty() {
            return;
        }
        shared.pending_events.borrow_mut().extend(events);
        // A dispatch further up the stack delivers these.
        let Ok(mut listeners) = shared.listeners.try_borrow_mut() else {
            return;
        };
        loop {
            let Some(event) = shared.pending_events.borrow_mut().pop_front() else {
                break;
            };
            for listener in listeners.iter_mut() {
                listener(&event);
            }
            listeners.append(&mut shared.staged_listeners.borrow_mut());
        }
    }
}

impl std::fmt::Debug for CarouselEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("CarouselEngine")
            .field("model", &state.model)
            .field("phase", &state.tracker.phase())
            .field("settling", &state.settle.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
