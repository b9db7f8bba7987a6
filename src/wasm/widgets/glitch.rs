use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use super::Widget;
use crate::error::Result;
use crate::wasm::timer::{set_timeout, Interval};

const CHECK_EVERY_MS: i32 = 3_000;
const PAUSE_MS: i32 = 100;
/// Chance per check that the glitch animation hiccups.
const HICCUP_ABOVE: f64 = 0.95;

/// Occasionally restarts the `.glitch` headline's CSS animation.
pub struct Glitch {
    interval: Option<Interval>,
}

impl Glitch {
    pub fn start(window: &Window, document: &Document) -> Result<Self> {
        let Some(element) = document
            .query_selector(".glitch")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return Ok(Self { interval: None });
        };

        let win = window.clone();
        let interval = Interval::new(window, CHECK_EVERY_MS, move || {
            if js_sys::Math::random() <= HICCUP_ABOVE {
                return;
            }
            element.style().set_property("animation", "none").ok();
            let el = element.clone();
            if let Err(e) = set_timeout(&win, PAUSE_MS, move || {
                el.style().set_property("animation", "").ok();
            }) {
                log::warn!("glitch restore not scheduled: {}", e);
            }
        })?;

        Ok(Self {
            interval: Some(interval),
        })
    }

    /// False when the page has no `.glitch` headline.
    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }
}

impl Widget for Glitch {
    fn name(&self) -> &'static str {
        "glitch"
    }
}
