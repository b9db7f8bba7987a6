use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent};

use super::{body, query_all, Widget};
use crate::error::{CosmicError, Result};
use crate::wasm::EventListener;

const SCREENSHOTS: &str = ".project-screenshot, .commercial-screenshot";

struct Viewer {
    modal: Element,
    image: HtmlImageElement,
    body: HtmlElement,
}

impl Viewer {
    fn open(&self, src: &str) {
        self.image.set_src(src);
        self.modal.class_list().add_1("active").ok();
        self.body.style().set_property("overflow", "hidden").ok();
    }

    fn close(&self) {
        self.modal.class_list().remove_1("active").ok();
        self.body.style().set_property("overflow", "").ok();
    }
}

/// Lightbox for project screenshots.
pub struct ImageViewer {
    viewer: Rc<Viewer>,
    _listeners: Vec<EventListener>,
}

impl ImageViewer {
    pub fn start(document: &Document) -> Result<Self> {
        let modal = document
            .get_element_by_id("imageViewer")
            .ok_or_else(|| CosmicError::missing("#imageViewer"))?;
        let image = document
            .get_element_by_id("viewerImage")
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            .ok_or_else(|| CosmicError::missing("img#viewerImage"))?;
        let close_button = document
            .query_selector(".image-viewer-close")?
            .ok_or_else(|| CosmicError::missing(".image-viewer-close"))?;

        let viewer = Rc::new(Viewer {
            modal,
            image,
            body: body(document)?,
        });
        let mut listeners = Vec::new();

        for shot in query_all(document, SCREENSHOTS)? {
            if let Some(el) = shot.dyn_ref::<HtmlElement>() {
                el.style().set_property("cursor", "pointer").ok();
            }
            let (v, source) = (viewer.clone(), shot.clone());
            listeners.push(EventListener::new(&shot, "click", move |event| {
                event.prevent_default();
                event.stop_propagation();
                v.open(&image_source(&source));
            })?);
        }

        let v = viewer.clone();
        listeners.push(EventListener::new(&close_button, "click", move |_| v.close())?);

        let v = viewer.clone();
        listeners.push(EventListener::new(&viewer.modal, "click", move |event| {
            let modal: &EventTarget = v.modal.as_ref();
            if event.target().as_ref() == Some(modal) {
                v.close();
            }
        })?);

        let v = viewer.clone();
        listeners.push(EventListener::new(document, "keydown", move |event| {
            if event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|e| e.key() == "Escape")
            {
                v.close();
            }
        })?);

        Ok(Self {
            viewer,
            _listeners: listeners,
        })
    }

    pub fn is_open(&self) -> bool {
        self.viewer.modal.class_list().contains("active")
    }
}

/// Resolved `src` for images, the raw attribute for anything else.
fn image_source(element: &Element) -> String {
    match element.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.src(),
        None => element.get_attribute("src").unwrap_or_default(),
    }
}

impl Widget for ImageViewer {
    fn name(&self) -> &'static str {
        "image viewer"
    }

    fn dispose(self: Box<Self>) {
        self.viewer.close();
    }
}
