//! The animated galaxy: scene, camera, pointer state and the per-frame update
//! that ties them together.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::MotionConfig;
use crate::frame::{Clock, FrameLoop, FrameScheduler};
use crate::motion::{opacity_pulse, Interaction};
use crate::scene::Scene;
use crate::viewport::Viewport;

/// Draw surface the background renders into.
pub trait SceneRenderer {
    /// Surface or pixel ratio changed.
    fn resize(&mut self, viewport: &Viewport);
    fn render(&mut self, scene: &Scene, viewport: &Viewport);
}

pub struct CosmicBackground<R> {
    scene: Scene,
    viewport: Viewport,
    interaction: Interaction,
    motion: MotionConfig,
    renderer: R,
}

impl<R: SceneRenderer> CosmicBackground<R> {
    pub fn new(scene: Scene, viewport: Viewport, mut renderer: R, motion: MotionConfig) -> Self {
        renderer.resize(&viewport);
        Self {
            scene,
            viewport,
            interaction: Interaction::new(&motion),
            motion,
            renderer,
        }
    }

    /// Pointer at client pixel coordinates.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        let (nx, ny) = self.viewport.normalize_pointer(client_x, client_y);
        self.interaction.pointer_moved(nx, ny);
    }

    pub fn scrolled(&mut self, scroll_y: f64) {
        self.viewport.scrolled(scroll_y);
    }

    pub fn resized(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
        self.renderer.resize(&self.viewport);
    }

    /// Advance one frame and render it. `now_ms` is wall-clock time.
    pub fn tick(&mut self, now_ms: f64) {
        self.interaction.smooth();
        let current = self.interaction.current;

        let galaxy = &mut self.scene.galaxy;
        galaxy.rotation.y += self.motion.spin_rate;
        galaxy.rotation.x = current.x;
        // the pointer nudge lands on the same axis as the autonomous spin
        galaxy.rotation.y += current.y * self.motion.pointer_nudge;
        galaxy.material.opacity = opacity_pulse(now_ms, &self.motion) as f32;

        self.renderer.render(&self.scene, &self.viewport);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: SceneRenderer + 'static> CosmicBackground<R> {
    /// Hand the background to `scheduler` and tick it every frame with the
    /// time read from `clock`.
    pub fn start(self, scheduler: Rc<dyn FrameScheduler>, clock: Rc<dyn Clock>) -> RunningBackground<R> {
        let background = Rc::new(RefCell::new(self));
        let weak = Rc::downgrade(&background);
        let frame_loop = FrameLoop::start(scheduler, move |_| {
            if let Some(bg) = weak.upgrade() {
                bg.borrow_mut().tick(clock.now_ms());
            }
        });
        log::debug!("cosmic background started");
        RunningBackground {
            background,
            frame_loop,
        }
    }
}

/// A started background. Input handlers share it through [`RunningBackground::shared`].
pub struct RunningBackground<R> {
    background: Rc<RefCell<CosmicBackground<R>>>,
    frame_loop: FrameLoop,
}

impl<R> RunningBackground<R> {
    pub fn shared(&self) -> Rc<RefCell<CosmicBackground<R>>> {
        self.background.clone()
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }

    /// Stop the frame loop and release the background.
    pub fn dispose(self) {
        self.frame_loop.stop();
        log::debug!("cosmic background disposed after {} frames", self.frame_loop.frames());
    }
}
