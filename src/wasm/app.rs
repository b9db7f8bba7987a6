use web_sys::{Document, Window};

use super::cosmic::Cosmic;
use super::widgets::{
    CursorTrail, EasterEgg, Glitch, ImageViewer, PerformanceMode, ScrollReveal, SmoothScroll, Tabs,
    Widget,
};
use crate::error::{CosmicError, Result};

/// Composition root: owns the background and every widget on the page.
pub struct App {
    cosmic: Option<Cosmic>,
    widgets: Vec<Box<dyn Widget>>,
}

impl App {
    /// Start everything that can start. A component that fails is logged and
    /// left out; the rest of the page keeps working.
    pub fn start(window: &Window, document: &Document) -> Self {
        let cosmic = match Cosmic::start(window, document) {
            Ok(cosmic) => Some(cosmic),
            Err(e @ (CosmicError::CapabilityAbsent(_) | CosmicError::MissingElement(_))) => {
                log::warn!("{}; using fallback background", e);
                None
            }
            Err(e) => {
                log::error!("error initializing cosmic background: {}", e);
                None
            }
        };

        let mut widgets: Vec<Box<dyn Widget>> = Vec::new();
        add(&mut widgets, "image viewer", ImageViewer::start(document));
        add(&mut widgets, "tabs", Tabs::start(document));
        add(&mut widgets, "smooth scroll", SmoothScroll::start(document));
        add(&mut widgets, "scroll reveal", ScrollReveal::start(window, document));
        add(&mut widgets, "glitch", Glitch::start(window, document));
        add(&mut widgets, "performance mode", PerformanceMode::start(window, document));
        add(&mut widgets, "easter egg", EasterEgg::start(window, document));
        add(&mut widgets, "cursor trail", CursorTrail::start(window, document));

        log::info!(
            "initialized: background {}, {} widgets",
            if cosmic.is_some() { "on" } else { "off" },
            widgets.len()
        );
        Self { cosmic, widgets }
    }

    pub fn has_background(&self) -> bool {
        self.cosmic.is_some()
    }

    pub fn widget_names(&self) -> Vec<&'static str> {
        self.widgets.iter().map(|w| w.name()).collect()
    }

    pub fn dispose(self) {
        if let Some(cosmic) = self.cosmic {
            cosmic.dispose();
        }
        for widget in self.widgets {
            log::debug!("disposing {}", widget.name());
            widget.dispose();
        }
    }
}

fn add<W: Widget + 'static>(widgets: &mut Vec<Box<dyn Widget>>, name: &str, started: Result<W>) {
    match started {
        Ok(widget) => widgets.push(Box::new(widget)),
        Err(e) => log::warn!("{} disabled: {}", name, e),
    }
}
