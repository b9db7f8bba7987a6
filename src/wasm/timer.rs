use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::error::Result;

/// Run `f` once after `ms`. The closure frees itself after firing.
pub fn set_timeout(window: &Window, ms: i32, f: impl FnOnce() + 'static) -> Result<i32> {
    let callback = Closure::once_into_js(f);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)?;
    Ok(id)
}

/// Repeating timer, cleared on drop.
pub struct Interval {
    window: Window,
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(window: &Window, ms: i32, f: impl FnMut() + 'static) -> Result<Self> {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )?;
        Ok(Self {
            window: window.clone(),
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}
