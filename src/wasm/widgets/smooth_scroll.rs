use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{query_all, Widget};
use crate::error::Result;
use crate::wasm::EventListener;

/// In-page `#anchor` links scroll smoothly instead of jumping.
pub struct SmoothScroll {
    _listeners: Vec<EventListener>,
}

impl SmoothScroll {
    pub fn start(document: &Document) -> Result<Self> {
        let anchors = query_all(document, r##"a[href^="#"]"##)?;
        let mut listeners = Vec::with_capacity(anchors.len());

        for anchor in anchors {
            let doc = document.clone();
            let link = anchor.clone();
            listeners.push(EventListener::new(&anchor, "click", move |event| {
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                // a bare "#" is not a valid selector; treat it like a miss
                if let Ok(Some(target)) = doc.query_selector(&href) {
                    let opts = ScrollIntoViewOptions::new();
                    opts.set_behavior(ScrollBehavior::Smooth);
                    opts.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            })?);
        }

        Ok(Self {
            _listeners: listeners,
        })
    }
}

impl Widget for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth scroll"
    }
}
