//! Ownership of the single in-flight animation-frame request.

/// Something that can queue and cancel a frame callback.
pub trait FrameScheduler {
    type Handle: Copy;

    /// Queue the next frame; `None` when the platform refused.
    fn schedule(&mut self) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// A self-rescheduling frame loop with an explicit active handle.
///
/// The host calls [`FrameTask::begin_frame`] from its frame callback and only
/// runs the frame body when it returns `true`. [`FrameTask::pause`] idles the
/// loop until the next [`FrameTask::start`]; after [`FrameTask::stop`] the
/// task never schedules again.
pub struct FrameTask<S: FrameScheduler> {
    scheduler: S,
    active: Option<S::Handle>,
    paused: bool,
    stopped: bool,
}

impl<S: FrameScheduler> FrameTask<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            active: None,
            paused: false,
            stopped: false,
        }
    }

    /// Schedule the first frame, or resume a paused loop.
    pub fn start(&mut self) {
        if self.stopped {
            return;
        }
        self.paused = false;
        if self.active.is_none() {
            self.active = self.scheduler.schedule();
        }
    }

    /// Called when a scheduled frame fires. Queues the following frame
    /// before the body runs.
    pub fn begin_frame(&mut self) -> bool {
        self.active = None;
        if self.stopped || self.paused {
            return false;
        }
        self.active = self.scheduler.schedule();
        true
    }

    /// Cancel the pending request but keep the task resumable.
    pub fn pause(&mut self) {
        if self.stopped {
            return;
        }
        self.paused = true;
        if let Some(handle) = self.active.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Cancel the pending request. Idempotent.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        if let Some(handle) = self.active.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        !self.stopped && self.active.is_some()
    }

    pub fn is_paused(&self) -> bool {
        !self.stopped && self.paused
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl<S: FrameScheduler> Drop for FrameTask<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
