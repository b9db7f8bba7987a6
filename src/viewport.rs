use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::util::map_range;

/// Perspective camera plus the size of the surface it draws into.
///
/// The camera sits on the +Z axis looking at the origin; scrolling pushes it
/// further back.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    fov_y_deg: f32,
    near: f32,
    far: f32,
    aspect: f64,
    base_depth: f64,
    scroll_depth: f64,
    depth: f64,
    width: u32,
    height: u32,
    pixel_ratio: f64,
}

impl Viewport {
    pub fn new(camera: &CameraConfig, width: u32, height: u32, pixel_ratio: f64) -> Self {
        let mut vp = Self {
            fov_y_deg: camera.fov_deg,
            near: camera.near,
            far: camera.far,
            aspect: 1.0,
            base_depth: camera.depth,
            scroll_depth: camera.scroll_depth,
            depth: camera.depth,
            width: 0,
            height: 0,
            pixel_ratio: 1.0,
        };
        vp.set_pixel_ratio(pixel_ratio);
        vp.resize(width, height);
        vp
    }

    /// Surface now measures `width` x `height` CSS pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        // a collapsed surface keeps the last usable aspect
        if width > 0 && height > 0 {
            self.aspect = width as f64 / height as f64;
        }
    }

    pub fn set_pixel_ratio(&mut self, ratio: f64) {
        self.pixel_ratio = if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 };
    }

    pub fn scrolled(&mut self, scroll_y: f64) {
        self.depth = self.base_depth + scroll_y * self.scroll_depth;
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Backing store size in device pixels.
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        (
            (self.width as f64 * self.pixel_ratio).floor() as u32,
            (self.height as f64 * self.pixel_ratio).floor() as u32,
        )
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.depth as f32)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.camera_position())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_deg.to_radians(),
            self.aspect as f32,
            self.near,
            self.far,
        )
    }

    /// Map a client-space pointer position to [-1,1] on both axes, +y up.
    pub fn normalize_pointer(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        let w = self.width.max(1) as f64;
        let h = self.height.max(1) as f64;
        (
            map_range(client_x, 0.0, w, -1.0, 1.0),
            map_range(client_y, 0.0, h, 1.0, -1.0),
        )
    }
}
