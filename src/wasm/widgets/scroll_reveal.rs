use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::{query_all, Widget};
use crate::error::Result;
use crate::frame::FrameScheduler;
use crate::page::reveal::{is_revealed, REVEAL_SELECTOR};
use crate::wasm::scheduler::AnimationFrameScheduler;
use crate::wasm::EventListener;

/// Fades cards in once they scroll into view.
pub struct ScrollReveal {
    _listener: EventListener,
}

impl ScrollReveal {
    pub fn start(window: &Window, document: &Document) -> Result<Self> {
        let elements = Rc::new(query_all(document, REVEAL_SELECTOR)?);
        reveal_visible(window, &elements);

        // at most one check per animation frame
        let scheduler = AnimationFrameScheduler::new(window);
        let ticking = Rc::new(Cell::new(false));
        let win = window.clone();
        let listener = EventListener::new(window, "scroll", move |_| {
            if ticking.replace(true) {
                return;
            }
            let (win, elements, ticking) = (win.clone(), elements.clone(), ticking.clone());
            scheduler.request_next_frame(Box::new(move |_| {
                reveal_visible(&win, &elements);
                ticking.set(false);
            }));
        })?;

        Ok(Self {
            _listener: listener,
        })
    }
}

fn reveal_visible(window: &Window, elements: &[Element]) {
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    for element in elements {
        let top = element.get_bounding_client_rect().top();
        if !is_revealed(top, height) {
            continue;
        }
        if let Some(el) = element.dyn_ref::<HtmlElement>() {
            let style = el.style();
            style.set_property("opacity", "1").ok();
            style.set_property("transform", "translateY(0)").ok();
        }
    }
}

impl Widget for ScrollReveal {
    fn name(&self) -> &'static str {
        "scroll reveal"
    }
}
