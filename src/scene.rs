use std::f64::consts::TAU;

use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;

use crate::config::{CosmicConfig, FogConfig};
use crate::particles::{self, rgb, PointCloud, WHITE};
use crate::sprite::SpriteTexture;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blending {
    Normal,
    /// Overlapping points sum their colors.
    Additive,
}

/// How a layer's points are shaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMaterial {
    /// Size of every point in the layer. Per-point sizes in the cloud are
    /// kept as data only.
    pub size: f32,
    pub opacity: f32,
    /// Multiplied with per-point colors, or used alone when there are none.
    pub color: Vec3,
    pub size_attenuation: bool,
    pub blending: Blending,
}

/// Rotation angles in radians, applied X then Y then Z.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// On-screen point size for one layer and viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    /// Material size in device pixels.
    pub size: f32,
    /// Half the CSS height of the surface when points shrink with distance.
    pub attenuation: Option<f32>,
}

impl PointScale {
    /// Device-pixel size of a point `depth` units in front of the camera.
    pub fn at_depth(&self, depth: f32) -> f32 {
        match self.attenuation {
            Some(scale) => self.size * scale / depth,
            None => self.size,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Layer {
    pub name: &'static str,
    pub cloud: PointCloud,
    pub material: PointMaterial,
    pub rotation: Euler,
}

impl Layer {
    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_euler(
            EulerRot::XYZ,
            r.x.rem_euclid(TAU) as f32,
            r.y.rem_euclid(TAU) as f32,
            r.z.rem_euclid(TAU) as f32,
        )
    }

    pub fn point_scale(&self, viewport: &Viewport) -> PointScale {
        let (_, height) = viewport.size();
        PointScale {
            size: self.material.size * viewport.pixel_ratio() as f32,
            attenuation: self
                .material
                .size_attenuation
                .then(|| height as f32 * 0.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub density: f32,
}

impl From<&FogConfig> for Fog {
    fn from(cfg: &FogConfig) -> Self {
        Fog {
            color: rgb(cfg.color),
            density: cfg.density,
        }
    }
}

/// Everything the renderer draws: three point layers sharing one sprite.
#[derive(Debug, Clone)]
pub struct Scene {
    pub galaxy: Layer,
    pub nebula: Layer,
    pub stars: Layer,
    pub fog: Fog,
    pub sprite: SpriteTexture,
}

impl Scene {
    pub fn generate<R: Rng + ?Sized>(cfg: &CosmicConfig, rng: &mut R) -> Self {
        let galaxy = Layer {
            name: "galaxy",
            cloud: particles::galaxy(&cfg.galaxy, rng),
            material: PointMaterial {
                size: cfg.galaxy.point_size,
                opacity: cfg.galaxy.opacity,
                color: Vec3::ONE,
                size_attenuation: true,
                blending: Blending::Additive,
            },
            rotation: Euler::default(),
        };

        let nebula = Layer {
            name: "nebula",
            cloud: particles::nebula(&cfg.nebula, rng),
            material: PointMaterial {
                size: cfg.nebula.point_size,
                opacity: cfg.nebula.opacity,
                color: Vec3::ONE,
                size_attenuation: true,
                blending: Blending::Additive,
            },
            rotation: Euler::default(),
        };

        let stars = Layer {
            name: "stars",
            cloud: particles::star_shell(&cfg.stars, rng),
            material: PointMaterial {
                size: cfg.stars.point_size,
                opacity: cfg.stars.opacity,
                color: rgb(WHITE),
                size_attenuation: false,
                blending: Blending::Additive,
            },
            rotation: Euler::default(),
        };

        Scene {
            galaxy,
            nebula,
            stars,
            fog: Fog::from(&cfg.fog),
            sprite: SpriteTexture::default(),
        }
    }

    /// Draw order.
    pub fn layers(&self) -> [&Layer; 3] {
        [&self.galaxy, &self.nebula, &self.stars]
    }
}
