#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod background;
pub mod config;
pub mod error;
pub mod frame;
pub mod motion;
pub mod page;
pub mod particles;
pub mod scene;
pub mod sprite;
pub mod util;
pub mod viewport;

pub use background::{CosmicBackground, RunningBackground, SceneRenderer};
pub use config::CosmicConfig;
pub use error::CosmicError;
pub use scene::Scene;
pub use viewport::Viewport;

// Only compile browser-facing code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    mod app;
    mod cosmic;
    mod listener;
    mod render;
    mod scheduler;
    mod timer;
    pub mod widgets;

    pub use app::App;
    pub use listener::EventListener;

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let app = App::start(&window, &document);
        APP.with(|slot| *slot.borrow_mut() = Some(app));
        log::info!("cosmic systems online");
        Ok(())
    }

    /// Tear everything down: listeners, timers and the frame loop.
    #[wasm_bindgen]
    pub fn shutdown() {
        if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
            app.dispose();
        }
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
