use crate::FrameCallbackId;
use std::rc::Rc;

/// Host capability for per-frame callbacks (`requestAnimationFrame` and friends).
///
/// A registered callback runs at most once, receiving the frame time in
/// nanoseconds. Implementations return `None` when they cannot schedule.
pub trait FrameScheduler {
    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64)>)
        -> Option<FrameCallbackId>;

    /// Drops a pending callback. Unknown or already-fired ids are ignored.
    fn cancel_frame_callback(&self, id: FrameCallbackId);
}

#[derive(Clone)]
pub struct FrameClock {
    scheduler: Rc<dyn FrameScheduler>,
}

impl FrameClock {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self { scheduler }
    }

    pub fn scheduler(&self) -> Rc<dyn FrameScheduler> {
        Rc::clone(&self.scheduler)
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let scheduler = Rc::clone(&self.scheduler);
        match scheduler.register_frame_callback(Box::new(callback)) {
            Some(id) => FrameCallbackRegistration::new(scheduler, id),
            None => {
                log::warn!("frame scheduler refused a frame callback");
                FrameCallbackRegistration::inactive(scheduler)
            }
        }
    }
}

impl std::fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameClock").finish_non_exhaustive()
    }
}

/// Handle to a pending frame callback. Dropping it cancels the callback.
pub struct FrameCallbackRegistration {
    scheduler: Rc<dyn FrameScheduler>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn new(scheduler: Rc<dyn FrameScheduler>, id: FrameCallbackId) -> Self {
        Self {
            scheduler,
            id: Some(id),
        }
    }

    fn inactive(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            scheduler,
            id: None,
        }
    }

    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame_callback(id);
        }
    }
}

impl std::fmt::Debug for FrameCallbackRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameCallbackRegistration")
            .field("id", &self.id)
            .finish()
    }
}
