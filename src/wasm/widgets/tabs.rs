use std::rc::Rc;

use web_sys::{Document, Element};

use super::{query_all, Widget};
use crate::error::Result;
use crate::wasm::EventListener;

const ACTIVE: &str = "active";

/// `.tab-btn` buttons switching between `.projects-grid` panels.
pub struct Tabs {
    _listeners: Vec<EventListener>,
}

impl Tabs {
    pub fn start(document: &Document) -> Result<Self> {
        let tabs = Rc::new(query_all(document, ".tab-btn")?);
        let panels = Rc::new(query_all(document, ".projects-grid")?);

        let mut listeners = Vec::with_capacity(tabs.len());
        for tab in tabs.iter() {
            let (all_tabs, panels, clicked) = (tabs.clone(), panels.clone(), tab.clone());
            listeners.push(EventListener::new(tab, "click", move |_| {
                let target = clicked.get_attribute("data-tab").unwrap_or_default();
                switch_tab(&all_tabs, &panels, &clicked, &target);
            })?);
        }

        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn switch_tab(tabs: &[Element], panels: &[Element], clicked: &Element, target: &str) {
    for tab in tabs {
        tab.class_list().remove_1(ACTIVE).ok();
    }
    clicked.class_list().add_1(ACTIVE).ok();

    for panel in panels {
        let classes = panel.class_list();
        if panel.id() == target {
            classes.add_1(ACTIVE).ok();
        } else {
            classes.remove_1(ACTIVE).ok();
        }
    }
}

impl Widget for Tabs {
    fn name(&self) -> &'static str {
        "tabs"
    }
}
