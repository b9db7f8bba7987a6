use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, MouseEvent, WebGl2RenderingContext as GL, Window};

use super::listener::EventListener;
use super::render::WebGlRenderer;
use super::scheduler::{AnimationFrameScheduler, WallClock};
use crate::background::{CosmicBackground, RunningBackground};
use crate::config::CosmicConfig;
use crate::error::{CosmicError, Result};
use crate::scene::Scene;
use crate::viewport::Viewport;

pub const CANVAS_ID: &str = "cosmic-canvas";
const CONFIG_ATTRIBUTE: &str = "data-cosmic-config";

/// The running galaxy background plus the input listeners feeding it.
pub struct Cosmic {
    running: RunningBackground<WebGlRenderer>,
    _listeners: Vec<EventListener>,
}

impl Cosmic {
    pub fn start(window: &Window, document: &Document) -> Result<Self> {
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| CosmicError::missing(format!("#{}", CANVAS_ID)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CosmicError::Dom(format!("#{} is not a canvas", CANVAS_ID)))?;

        let config = read_config(&canvas);

        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or(CosmicError::CapabilityAbsent("WebGL2"))?
            .dyn_into()
            .map_err(|_| CosmicError::CapabilityAbsent("WebGL2"))?;

        let seed = config.seed.unwrap_or_else(random_seed);
        log::info!("generating cosmos with seed {}", seed);
        let scene = Scene::generate(&config, &mut StdRng::seed_from_u64(seed));

        let (width, height) = window_size(window);
        let pixel_ratio = window.device_pixel_ratio().min(config.max_pixel_ratio);
        let viewport = Viewport::new(&config.camera, width, height, pixel_ratio);

        let renderer = WebGlRenderer::new(gl, canvas, &scene)?;
        let background = CosmicBackground::new(scene, viewport, renderer, config.motion.clone());
        let running = background.start(
            Rc::new(AnimationFrameScheduler::new(window)),
            Rc::new(WallClock),
        );

        let listeners = wire_input(window, document, &running)?;
        Ok(Self {
            running,
            _listeners: listeners,
        })
    }

    pub fn dispose(self) {
        // listeners detach on drop
        self.running.dispose();
    }
}

fn wire_input(
    window: &Window,
    document: &Document,
    running: &RunningBackground<WebGlRenderer>,
) -> Result<Vec<EventListener>> {
    let mut listeners = Vec::with_capacity(3);

    let bg = running.shared();
    listeners.push(EventListener::new(document, "mousemove", move |event| {
        if let Some(e) = event.dyn_ref::<MouseEvent>() {
            bg.borrow_mut().pointer_moved(e.client_x() as f64, e.client_y() as f64);
        }
    })?);

    let bg = running.shared();
    let win = window.clone();
    listeners.push(EventListener::new(window, "scroll", move |_| {
        let y = win.scroll_y().unwrap_or(0.0);
        bg.borrow_mut().scrolled(y);
    })?);

    let bg = running.shared();
    let win = window.clone();
    listeners.push(EventListener::new(window, "resize", move |_| {
        let (w, h) = window_size(&win);
        bg.borrow_mut().resized(w, h);
    })?);

    Ok(listeners)
}

fn read_config(canvas: &HtmlCanvasElement) -> CosmicConfig {
    let Some(text) = canvas.get_attribute(CONFIG_ATTRIBUTE) else {
        return CosmicConfig::default();
    };
    CosmicConfig::from_json(&text).unwrap_or_else(|e| {
        log::warn!("ignoring {}: {}", CONFIG_ATTRIBUTE, e);
        CosmicConfig::default()
    })
}

fn window_size(window: &Window) -> (u32, u32) {
    let dim = |v: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = js_sys::Date::now() as u64;
    (hi << 32) ^ lo
}
