use web_sys::{Document, Window};

use super::{body, Widget};
use crate::error::Result;
use crate::page::device::{wants_performance_mode, PERFORMANCE_CLASS, REDUCED_MOTION_QUERY};

/// Tags `<body>` with `performance-mode` on weak devices or when the user asks
/// for reduced motion, so the stylesheet can tone things down.
pub struct PerformanceMode {
    active: bool,
}

impl PerformanceMode {
    pub fn start(window: &Window, document: &Document) -> Result<Self> {
        let reduced_motion = window
            .match_media(REDUCED_MOTION_QUERY)?
            .map(|mq| mq.matches())
            .unwrap_or(false);
        let user_agent = window.navigator().user_agent().unwrap_or_default();

        let active = wants_performance_mode(&user_agent, reduced_motion);
        if active {
            body(document)?.class_list().add_1(PERFORMANCE_CLASS)?;
            log::info!("performance mode activated");
        }
        Ok(Self { active })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Widget for PerformanceMode {
    fn name(&self) -> &'static str {
        "performance mode"
    }
}
