//! In-process frame callback queue.
//!
//! Hosts without a native frame primitive (and every test) pump this queue
//! from their own loop by calling [`FrameCallbackQueue::drain_frame_callbacks`]
//! once per frame.

use crate::frame_clock::FrameScheduler;
use crate::FrameCallbackId;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

type FrameCallback = Box<dyn FnOnce(u64)>;

#[derive(Clone, Default)]
pub struct FrameCallbackQueue {
    inner: Rc<RefCell<QueueInner>>,
}

#[derive(Default)]
struct QueueInner {
    next_id: FrameCallbackId,
    pending: SmallVec<[(FrameCallbackId, FrameCallback); 4]>,
    frame_request_hook: Option<Rc<dyn Fn()>>,
}

impl FrameCallbackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a hook invoked whenever the queue goes from empty to
    /// non-empty, so the host can wake up and schedule a frame.
    pub fn set_frame_request_hook(&self, hook: impl Fn() + 'static) {
        self.inner.borrow_mut().frame_request_hook = Some(Rc::new(hook));
    }

    pub fn has_pending_frame_callbacks(&self) -> bool {
        !self.inner.borrow().pending.is_empty()
    }

    pub fn pending_frame_callbacks(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Runs every callback registered before this call, in registration
    /// order. Callbacks registered while draining wait for the next frame.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        let callbacks = std::mem::take(&mut self.inner.borrow_mut().pending);
        let count = callbacks.len();
        for (id, callback) in callbacks {
            log::trace!("frame {frame_time_nanos}: running callback {id}");
            callback(frame_time_nanos);
        }
        count
    }
}

impl FrameScheduler for FrameCallbackQueue {
    fn register_frame_callback(&self, callback: FrameCallback) -> Option<FrameCallbackId> {
        let (id, hook) = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let id = inner.next_id;
            let was_idle = inner.pending.is_empty();
            inner.pending.push((id, callback));
            let hook = if was_idle {
                inner.frame_request_hook.clone()
            } else {
                None
            };
            (id, hook)
        };
        if let Some(hook) = hook {
            hook();
        }
        Some(id)
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|(pending_id, _)| *pending_id != id);
    }
}

impl std::fmt::Debug for FrameCallbackQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameCallbackQueue")
            .field("pending", &self.pending_frame_callbacks())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/frame_queue_tests.rs"]
mod tests;
