//! DOM widgets living next to the background. Each one owns its listeners
//! and timers, so dropping it detaches it from the page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{CosmicError, Result};

mod cursor_trail;
mod easter_egg;
mod glitch;
mod image_viewer;
mod performance;
mod scroll_reveal;
mod smooth_scroll;
mod tabs;

pub use cursor_trail::CursorTrail;
pub use easter_egg::EasterEgg;
pub use glitch::Glitch;
pub use image_viewer::ImageViewer;
pub use performance::PerformanceMode;
pub use scroll_reveal::ScrollReveal;
pub use smooth_scroll::SmoothScroll;
pub use tabs::Tabs;

pub trait Widget {
    fn name(&self) -> &'static str;

    /// Detach from the page. Dropping does the same.
    fn dispose(self: Box<Self>) {}
}

/// Every element matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or_else(|| CosmicError::missing("body"))
}

/// Append a `<style id=id>` with `css` to `<head>` unless it is already there.
pub(crate) fn ensure_style(document: &Document, id: &str, css: &str) -> Result<()> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| CosmicError::missing("head"))?;
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}
