//! Frame scheduling seam.
//!
//! The browser hands out one callback per display refresh; a loop has to
//! re-register itself every frame. [`FrameLoop`] owns that dance on top of any
//! [`FrameScheduler`], so the same loop runs against `requestAnimationFrame`
//! in the page and against [`ManualScheduler`] in tests.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Receives the scheduler's frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

pub trait FrameScheduler {
    /// Run `callback` once, on the next frame.
    fn request_next_frame(&self, callback: FrameCallback) -> FrameHandle;
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Wall-clock milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

struct LoopState {
    scheduler: Rc<dyn FrameScheduler>,
    pending: Cell<Option<FrameHandle>>,
    frames: Cell<u64>,
    on_frame: RefCell<Box<dyn FnMut(f64)>>,
}

/// Self-rescheduling per-frame callback. Stops when [`FrameLoop::stop`] is
/// called or the loop is dropped.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(scheduler: Rc<dyn FrameScheduler>, on_frame: impl FnMut(f64) + 'static) -> Self {
        let state = Rc::new(LoopState {
            scheduler,
            pending: Cell::new(None),
            frames: Cell::new(0),
            on_frame: RefCell::new(Box::new(on_frame)),
        });
        arm(&state);
        FrameLoop { state }
    }

    pub fn stop(&self) {
        if let Some(handle) = self.state.pending.take() {
            self.state.scheduler.cancel_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.pending.get().is_some()
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.state.frames.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn arm(state: &Rc<LoopState>) {
    let weak: Weak<LoopState> = Rc::downgrade(state);
    let handle = state.scheduler.request_next_frame(Box::new(move |timestamp| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        if state.pending.take().is_none() {
            // stopped after this frame was queued
            return;
        }
        // next frame first, then this frame's work
        arm(&state);
        state.frames.set(state.frames.get() + 1);
        (state.on_frame.borrow_mut())(timestamp);
    }));
    state.pending.set(Some(handle));
}

/// Scheduler driven by hand: callbacks queue up until [`ManualScheduler::step`].
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    next_id: Cell<i32>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every callback queued before this call. Callbacks registered while
    /// stepping wait for the next step. Returns how many ran.
    pub fn step(&self, timestamp: f64) -> usize {
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let n = due.len();
        for (_, callback) in due {
            callback(timestamp);
        }
        n
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_next_frame(&self, callback: FrameCallback) -> FrameHandle {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = FrameHandle(id);
        self.queue.borrow_mut().push((handle, callback));
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.queue.borrow_mut().retain(|(h, _)| *h != handle);
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_loop(scheduler: &Rc<ManualScheduler>) -> (FrameLoop, Rc<RefCell<Vec<f64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let frame_loop = FrameLoop::start(scheduler.clone(), move |ts| sink.borrow_mut().push(ts));
        (frame_loop, seen)
    }

    #[test]
    fn reschedules_every_frame() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (frame_loop, seen) = counting_loop(&scheduler);

        assert_eq!(scheduler.pending(), 1);
        assert!(seen.borrow().is_empty());

        for i in 0..5 {
            assert_eq!(scheduler.step(i as f64 * 16.0), 1);
            assert_eq!(scheduler.pending(), 1);
        }
        assert_eq!(*seen.borrow(), [0.0, 16.0, 32.0, 48.0, 64.0]);
        assert_eq!(frame_loop.frames(), 5);
        assert!(frame_loop.is_running());
    }

    #[test]
    fn stop_cancels_pending_frame() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (frame_loop, seen) = counting_loop(&scheduler);
        scheduler.step(0.0);
        frame_loop.stop();
        assert!(!frame_loop.is_running());
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.step(16.0), 0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn drop_stops_loop() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (frame_loop, seen) = counting_loop(&scheduler);
        drop(frame_loop);
        scheduler.step(0.0);
        assert!(seen.borrow().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    /// A scheduler that ignores cancellation still must not revive a stopped loop.
    #[test]
    fn stale_callback_is_inert() {
        struct Deaf(ManualScheduler);
        impl FrameScheduler for Deaf {
            fn request_next_frame(&self, callback: FrameCallback) -> FrameHandle {
                self.0.request_next_frame(callback)
            }
            fn cancel_frame(&self, _: FrameHandle) {}
        }

        let scheduler = Rc::new(Deaf(ManualScheduler::new()));
        let seen = Rc::new(Cell::new(0));
        let sink = seen.clone();
        let frame_loop = FrameLoop::start(scheduler.clone(), move |_| sink.set(sink.get() + 1));
        frame_loop.stop();
        scheduler.0.step(0.0);
        assert_eq!(seen.get(), 0);
        assert_eq!(scheduler.0.pending(), 0);
    }

    #[test]
    fn manual_clock() {
        let clock = ManualClock::new(1_000.0);
        clock.advance(16.5);
        assert_eq!(clock.now_ms(), 1_016.5);
        clock.set(0.0);
        assert_eq!(clock.now_ms(), 0.0);
    }
}
