use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Window};

use super::{body, ensure_style, Widget};
use crate::error::Result;
use crate::page::trail::{TrailQueue, TRAIL_LIFETIME_MS};
use crate::wasm::timer::set_timeout;
use crate::wasm::EventListener;

const STYLE_ID: &str = "cursor-trail-style";
const KEYFRAMES: &str = "@keyframes trailFade { to { opacity: 0; transform: scale(2); } }";

/// Glowing dots left behind the pointer.
pub struct CursorTrail {
    trails: Rc<RefCell<TrailQueue<Element>>>,
    _listener: EventListener,
}

impl CursorTrail {
    pub fn start(window: &Window, document: &Document) -> Result<Self> {
        let trails = Rc::new(RefCell::new(TrailQueue::default()));

        let (win, doc, queue) = (window.clone(), document.clone(), trails.clone());
        let listener = EventListener::new(document, "mousemove", move |event| {
            let Some(e) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Err(err) = spawn_trail(&win, &doc, &queue, e.client_x(), e.client_y()) {
                log::warn!("cursor trail: {}", err);
            }
        })?;

        Ok(Self {
            trails,
            _listener: listener,
        })
    }

    pub fn live(&self) -> usize {
        self.trails.borrow().len()
    }
}

fn spawn_trail(
    window: &Window,
    document: &Document,
    trails: &RefCell<TrailQueue<Element>>,
    x: i32,
    y: i32,
) -> Result<()> {
    let trail = document.create_element("div")?;
    trail.set_class_name("cursor-trail");
    trail.set_attribute("style", &trail_css(x, y))?;
    ensure_style(document, STYLE_ID, KEYFRAMES)?;
    body(document)?.append_child(&trail)?;

    let expired = trail.clone();
    set_timeout(window, TRAIL_LIFETIME_MS, move || expired.remove())?;

    if let Some(oldest) = trails.borrow_mut().push(trail) {
        oldest.remove();
    }
    Ok(())
}

fn trail_css(x: i32, y: i32) -> String {
    format!(
        "position: fixed; left: {x}px; top: {y}px; width: 4px; height: 4px; \
         background: radial-gradient(circle, rgba(0, 240, 255, 0.8), transparent); \
         border-radius: 50%; pointer-events: none; z-index: 9999; \
         animation: trailFade 1s ease-out forwards;"
    )
}

impl Widget for CursorTrail {
    fn name(&self) -> &'static str {
        "cursor trail"
    }

    fn dispose(self: Box<Self>) {
        for trail in self.trails.borrow_mut().drain() {
            trail.remove();
        }
    }
}
