//! Tunables for the background. Every field defaults to the values the page
//! ships with; a JSON document can override any subset of them.

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CosmicConfig {
    /// Fixed seed for point generation. `None` draws one at startup.
    pub seed: Option<u64>,
    pub galaxy: GalaxyConfig,
    pub nebula: NebulaConfig,
    pub stars: StarShellConfig,
    pub camera: CameraConfig,
    pub fog: FogConfig,
    pub motion: MotionConfig,
    pub max_pixel_ratio: f64,
}

impl Default for CosmicConfig {
    fn default() -> Self {
        Self {
            seed: None,
            galaxy: GalaxyConfig::default(),
            nebula: NebulaConfig::default(),
            stars: StarShellConfig::default(),
            camera: CameraConfig::default(),
            fog: FogConfig::default(),
            motion: MotionConfig::default(),
            max_pixel_ratio: 2.0,
        }
    }
}

impl CosmicConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub count: usize,
    pub radius: f32,
    /// Extra twist per unit of radius.
    pub spin: f32,
    pub branches: usize,
    pub randomness: f32,
    pub randomness_power: i32,
    pub min_size: f32,
    pub max_size: f32,
    pub point_size: f32,
    pub opacity: f32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            count: 15_000,
            radius: 600.0,
            spin: 0.01,
            branches: 6,
            randomness: 50.0,
            randomness_power: 3,
            min_size: 0.5,
            max_size: 4.5,
            point_size: 2.0,
            opacity: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NebulaConfig {
    pub count: usize,
    /// Full edge lengths of the box the clouds are scattered in.
    pub extent: [f32; 3],
    pub min_size: f32,
    pub max_size: f32,
    pub point_size: f32,
    pub opacity: f32,
}

impl Default for NebulaConfig {
    fn default() -> Self {
        Self {
            count: 200,
            extent: [800.0, 400.0, 800.0],
            min_size: 20.0,
            max_size: 70.0,
            point_size: 30.0,
            opacity: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarShellConfig {
    pub count: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub point_size: f32,
    pub opacity: f32,
}

impl Default for StarShellConfig {
    fn default() -> Self {
        Self {
            count: 1_000,
            inner_radius: 800.0,
            outer_radius: 1_000.0,
            point_size: 1.0,
            opacity: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub depth: f64,
    /// Camera depth gained per scrolled pixel.
    pub scroll_depth: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 1_000.0,
            depth: 400.0,
            scroll_depth: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    pub color: u32,
    pub density: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: 0x0a0a0f,
            density: 0.0008,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub smoothing: f64,
    /// Autonomous spin around the vertical axis, radians per frame.
    pub spin_rate: f64,
    /// Target rotation at the edge of the viewport.
    pub pointer_tilt: f64,
    pub pointer_nudge: f64,
    pub pulse_base: f64,
    pub pulse_amplitude: f64,
    pub pulse_rate: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.05,
            spin_rate: 0.0005,
            pointer_tilt: 0.3,
            pointer_nudge: 0.001,
            pulse_base: 0.6,
            pulse_amplitude: 0.2,
            pulse_rate: 0.00005,
        }
    }
}
