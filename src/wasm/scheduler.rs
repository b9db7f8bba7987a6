use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::frame::{Clock, FrameCallback, FrameHandle, FrameScheduler};

/// `requestAnimationFrame` behind the [`FrameScheduler`] seam.
pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_next_frame(&self, callback: FrameCallback) -> FrameHandle {
        let js = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        match self.window.request_animation_frame(js.unchecked_ref()) {
            Ok(id) => FrameHandle(id),
            Err(e) => {
                // an unscheduled frame just means the loop goes quiet
                log::warn!("requestAnimationFrame failed: {:?}", e);
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.window.cancel_animation_frame(handle.0).ok();
    }
}

/// `Date.now()`.
pub struct WallClock;

impl Clock for WallClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}
