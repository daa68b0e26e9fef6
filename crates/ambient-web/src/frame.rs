use ambient_core::{FrameScheduler, FrameTask};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct RafScheduler {
    window: web::Window,
    callback: js_sys::Function,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn schedule(&mut self) -> Option<i32> {
        self.window.request_animation_frame(&self.callback).ok()
    }

    fn cancel(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

type TaskSlot = Rc<RefCell<Option<FrameTask<RafScheduler>>>>;

/// Resumes a paused [`FrameLoop`] from outside its frame body, e.g. an
/// input handler. Does nothing once the loop is stopped.
#[derive(Clone)]
pub struct FrameWaker(TaskSlot);

impl FrameWaker {
    pub fn wake(&self) {
        if let Some(t) = self.0.borrow_mut().as_mut() {
            t.start();
        }
    }
}

/// A `requestAnimationFrame` loop that runs `body` once per display refresh
/// until stopped or dropped. A body returning `false` pauses the loop until
/// it is woken again.
pub struct FrameLoop {
    task: TaskSlot,
    tick: Option<Closure<dyn FnMut(f64)>>,
}

impl FrameLoop {
    /// Build the loop without requesting a frame.
    pub fn new(window: &web::Window, mut body: impl FnMut(f64) -> bool + 'static) -> Self {
        let task: TaskSlot = Rc::new(RefCell::new(None));
        let task_tick = task.clone();
        let tick = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let run = match task_tick.borrow_mut().as_mut() {
                Some(t) => t.begin_frame(),
                None => false,
            };
            if run && !body(timestamp_ms) {
                if let Some(t) = task_tick.borrow_mut().as_mut() {
                    t.pause();
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let callback: js_sys::Function = tick.as_ref().unchecked_ref::<js_sys::Function>().clone();
        *task.borrow_mut() = Some(FrameTask::new(RafScheduler {
            window: window.clone(),
            callback,
        }));
        Self {
            task,
            tick: Some(tick),
        }
    }

    pub fn start(window: &web::Window, body: impl FnMut(f64) -> bool + 'static) -> Self {
        let frame_loop = Self::new(window, body);
        frame_loop.wake();
        frame_loop
    }

    pub fn wake(&self) {
        self.waker().wake();
    }

    pub fn waker(&self) -> FrameWaker {
        FrameWaker(self.task.clone())
    }

    pub fn is_running(&self) -> bool {
        self.task
            .borrow()
            .as_ref()
            .map(|t| t.is_running())
            .unwrap_or(false)
    }

    pub fn is_stopped(&self) -> bool {
        self.task
            .borrow()
            .as_ref()
            .map(|t| t.is_stopped())
            .unwrap_or(true)
    }

    /// Cancel the pending frame and release the callback.
    pub fn stop(&mut self) {
        if let Some(mut t) = self.task.borrow_mut().take() {
            t.stop();
        }
        // after cancelAnimationFrame nothing references the closure
        self.tick.take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
