use ambient_core::{FrameScheduler, FrameTask};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Calls {
    next: u32,
    scheduled: Vec<u32>,
    cancelled: Vec<u32>,
    refuse: bool,
}

#[derive(Clone, Default)]
struct Spy(Rc<RefCell<Calls>>);

impl FrameScheduler for Spy {
    type Handle = u32;

    fn schedule(&mut self) -> Option<u32> {
        let mut c = self.0.borrow_mut();
        if c.refuse {
            return None;
        }
        c.next += 1;
        let h = c.next;
        c.scheduled.push(h);
        Some(h)
    }

    fn cancel(&mut self, handle: u32) {
        self.0.borrow_mut().cancelled.push(handle);
    }
}

#[test]
fn each_frame_schedules_exactly_one_successor() {
    let spy = Spy::default();
    let mut task = FrameTask::new(spy.clone());
    task.start();
    task.start(); // already running
    assert_eq!(spy.0.borrow().scheduled, vec![1]);

    for _ in 0..3 {
        assert!(task.begin_frame());
    }
    assert_eq!(spy.0.borrow().scheduled, vec![1, 2, 3, 4]);
    assert!(task.is_running());
}

#[test]
fn stop_cancels_the_pending_request_once() {
    let spy = Spy::default();
    let mut task = FrameTask::new(spy.clone());
    task.start();
    task.begin_frame();
    task.stop();
    task.stop();
    assert_eq!(spy.0.borrow().cancelled, vec![2]);
    assert!(task.is_stopped());
    assert!(!task.is_running());
}

#[test]
fn no_frames_after_teardown() {
    let spy = Spy::default();
    let mut task = FrameTask::new(spy.clone());
    let mut bodies = 0;
    task.start();
    for _ in 0..5 {
        if task.begin_frame() {
            bodies += 1;
        }
    }
    task.stop();
    let scheduled_at_stop = spy.0.borrow().scheduled.len();

    // a callback that was already in flight when we stopped
    for _ in 0..3 {
        if task.begin_frame() {
            bodies += 1;
        }
    }
    task.start();
    assert_eq!(bodies, 5);
    assert_eq!(spy.0.borrow().scheduled.len(), scheduled_at_stop);
}

#[test]
fn dropping_the_task_cancels_it() {
    let spy = Spy::default();
    {
        let mut task = FrameTask::new(spy.clone());
        task.start();
    }
    assert_eq!(spy.0.borrow().cancelled, vec![1]);
}

#[test]
fn refused_schedule_leaves_nothing_to_cancel() {
    let spy = Spy::default();
    spy.0.borrow_mut().refuse = true;
    let mut task = FrameTask::new(spy.clone());
    task.start();
    assert!(!task.is_running());
    task.stop();
    assert!(spy.0.borrow().cancelled.is_empty());
}

#[test]
fn pause_cancels_and_start_resumes() {
    let spy = Spy::default();
    let mut task = FrameTask::new(spy.clone());
    task.start();
    assert!(task.begin_frame());
    task.pause();
    task.pause();
    assert!(task.is_paused());
    assert!(!task.is_running());
    assert_eq!(spy.0.borrow().cancelled, vec![2]);

    task.start();
    assert!(!task.is_paused());
    assert!(task.is_running());
    assert_eq!(spy.0.borrow().scheduled, vec![1, 2, 3]);
    assert!(task.begin_frame());
}

#[test]
fn paused_task_ignores_a_late_callback() {
    let spy = Spy::default();
    let mut task = FrameTask::new(spy.clone());
    task.start();
    task.pause();
    assert!(!task.begin_frame());
    assert_eq!(spy.0.borrow().scheduled, vec![1]);
}

#[test]
fn stop_is_final_even_when_paused() {
    let spy = Spy::default();
    let mut task = FrameTask::new(spy.clone());
    task.start();
    task.pause();
    task.stop();
    task.start();
    assert!(task.is_stopped());
    assert!(!task.is_paused());
    assert_eq!(spy.0.borrow().scheduled, vec![1]);
    assert_eq!(spy.0.borrow().cancelled, vec![1]);
}
