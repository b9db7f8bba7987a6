use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, Window};

use super::{body, ensure_style, Widget};
use crate::error::Result;
use crate::page::konami::SequenceMatcher;
use crate::wasm::timer::set_timeout;
use crate::wasm::EventListener;

const STYLE_ID: &str = "warp-speed-style";
const KEYFRAMES: &str = "@keyframes warpSpeed { \
    0%, 100% { filter: blur(0px); } \
    50% { filter: blur(10px) brightness(2); } }";
const WARP_MS: i32 = 2_000;

/// Konami code triggers a short "warp speed" blur on the whole page.
pub struct EasterEgg {
    _listener: EventListener,
}

impl EasterEgg {
    pub fn start(window: &Window, document: &Document) -> Result<Self> {
        let matcher = RefCell::new(SequenceMatcher::konami());
        let (win, doc) = (window.clone(), document.clone());

        let listener = EventListener::new(document, "keydown", move |event| {
            let Some(e) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if matcher.borrow_mut().press(&e.key()) {
                if let Err(err) = warp_speed(&win, &doc) {
                    log::warn!("warp drive failure: {}", err);
                }
            }
        })?;

        Ok(Self {
            _listener: listener,
        })
    }
}

fn warp_speed(window: &Window, document: &Document) -> Result<()> {
    ensure_style(document, STYLE_ID, KEYFRAMES)?;
    let body = body(document)?;
    body.style().set_property("animation", "warpSpeed 2s ease-in-out")?;
    set_timeout(window, WARP_MS, move || {
        body.style().set_property("animation", "").ok();
    })?;
    log::info!("🚀 WARP SPEED ACTIVATED! 🚀");
    Ok(())
}

impl Widget for EasterEgg {
    fn name(&self) -> &'static str {
        "easter egg"
    }
}
