//! DOM-free logic behind the page widgets.

pub mod device;
pub mod konami;
pub mod reveal;
pub mod trail;
