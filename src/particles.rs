//! Procedural point clouds: the spiral galaxy, the nebula blobs and the
//! distant star shell.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

use crate::config::{GalaxyConfig, NebulaConfig, StarShellConfig};
use crate::util::random_range;

pub const CYAN: u32 = 0x00f0ff;
pub const MAGENTA: u32 = 0xff00ff;
pub const PURPLE: u32 = 0x8b5cf6;
pub const WHITE: u32 = 0xffffff;

pub const GALAXY_PALETTE: [u32; 4] = [CYAN, MAGENTA, PURPLE, WHITE];

/// `0xRRGGBB` to linear floats in [0,1].
pub fn rgb(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32;
    let g = ((hex >> 8) & 0xff) as f32;
    let b = (hex & 0xff) as f32;
    Vec3::new(r, g, b) / 255.0
}

/// Fixed-size set of renderable points. Colors and sizes are either absent or
/// exactly as long as `positions`.
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub colors: Option<Vec<Vec3>>,
    pub sizes: Option<Vec<f32>>,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions flattened as `x, y, z` triples, ready for a vertex buffer.
    pub fn position_data(&self) -> Vec<f32> {
        flatten(&self.positions)
    }

    pub fn color_data(&self) -> Option<Vec<f32>> {
        self.colors.as_deref().map(flatten)
    }
}

fn flatten(v: &[Vec3]) -> Vec<f32> {
    let mut out = Vec::with_capacity(v.len() * 3);
    for p in v {
        out.extend_from_slice(&p.to_array());
    }
    out
}

/// One galaxy point before it is flattened into the cloud.
#[derive(Debug, Clone, Copy)]
pub struct GalaxySample {
    pub radius: f32,
    pub branch_angle: f32,
    pub spin_angle: f32,
    pub jitter: Vec3,
    pub position: Vec3,
    pub color: Vec3,
    pub size: f32,
}

/// `uniform^power * (±1) * scale`. Cubing pulls most offsets towards zero and
/// leaves a few outliers, which gives the arms a dense spine.
fn jitter<R: Rng + ?Sized>(rng: &mut R, power: i32, scale: f32) -> f32 {
    let magnitude = rng.gen::<f32>().powi(power);
    let sign = if rng.gen::<f32>() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign * scale
}

pub fn galaxy_sample<R: Rng + ?Sized>(index: usize, cfg: &GalaxyConfig, rng: &mut R) -> GalaxySample {
    let radius = rng.gen::<f32>() * cfg.radius;
    let spin_angle = radius * cfg.spin;
    let branches = cfg.branches.max(1);
    let branch_angle = (index % branches) as f32 * TAU / branches as f32;

    let jitter = Vec3::new(
        jitter(rng, cfg.randomness_power, cfg.randomness),
        jitter(rng, cfg.randomness_power, cfg.randomness),
        jitter(rng, cfg.randomness_power, cfg.randomness),
    );

    let angle = branch_angle + spin_angle;
    let position = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius) + jitter;

    let color = rgb(GALAXY_PALETTE[rng.gen_range(0..GALAXY_PALETTE.len())]);
    let size = random_range(rng, cfg.min_size, cfg.max_size);

    GalaxySample {
        radius,
        branch_angle,
        spin_angle,
        jitter,
        position,
        color,
        size,
    }
}

pub fn galaxy<R: Rng + ?Sized>(cfg: &GalaxyConfig, rng: &mut R) -> PointCloud {
    let mut positions = Vec::with_capacity(cfg.count);
    let mut colors = Vec::with_capacity(cfg.count);
    let mut sizes = Vec::with_capacity(cfg.count);

    for i in 0..cfg.count {
        let s = galaxy_sample(i, cfg, rng);
        positions.push(s.position);
        colors.push(s.color);
        sizes.push(s.size);
    }

    PointCloud {
        positions,
        colors: Some(colors),
        sizes: Some(sizes),
    }
}

pub fn nebula<R: Rng + ?Sized>(cfg: &NebulaConfig, rng: &mut R) -> PointCloud {
    let extent = Vec3::from_array(cfg.extent);
    let mut positions = Vec::with_capacity(cfg.count);
    let mut colors = Vec::with_capacity(cfg.count);
    let mut sizes = Vec::with_capacity(cfg.count);

    for _ in 0..cfg.count {
        let unit = Vec3::new(rng.gen(), rng.gen(), rng.gen()) - Vec3::splat(0.5);
        positions.push(unit * extent);
        colors.push(if rng.gen::<f32>() > 0.5 { rgb(CYAN) } else { rgb(MAGENTA) });
        sizes.push(random_range(rng, cfg.min_size, cfg.max_size));
    }

    PointCloud {
        positions,
        colors: Some(colors),
        sizes: Some(sizes),
    }
}

pub fn star_shell<R: Rng + ?Sized>(cfg: &StarShellConfig, rng: &mut R) -> PointCloud {
    let positions = (0..cfg.count)
        .map(|_| {
            let radius = random_range(rng, cfg.inner_radius, cfg.outer_radius);
            let theta = rng.gen::<f32>() * TAU;
            let phi = rng.gen::<f32>() * PI;
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        })
        .collect();

    PointCloud {
        positions,
        colors: None,
        sizes: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC0FFEE)
    }

    #[test]
    fn hex_colors() {
        assert_eq!(rgb(WHITE), Vec3::ONE);
        assert_eq!(rgb(CYAN), Vec3::new(0.0, 240.0 / 255.0, 1.0));
        assert_eq!(rgb(0x000000), Vec3::ZERO);
    }

    #[test]
    fn galaxy_arms_and_radius() {
        let cfg = GalaxyConfig::default();
        let mut rng = rng();
        let step = TAU / 6.0;
        for i in 0..cfg.count {
            let s = galaxy_sample(i, &cfg, &mut rng);
            assert!((0.0..=600.0).contains(&s.radius), "radius {}", s.radius);

            let arm = (s.branch_angle / step).round();
            assert!((0.0..6.0).contains(&arm));
            assert!((s.branch_angle - arm * step).abs() < 1e-5);
            assert_eq!(arm as usize, i % 6);

            assert!((s.spin_angle - s.radius * 0.01).abs() < 1e-5);
            assert!(s.jitter.abs().max_element() <= 50.0);
            assert_eq!(s.position.y, s.jitter.y);
            assert!((0.5..=4.5).contains(&s.size));
            assert!(GALAXY_PALETTE.iter().any(|&c| rgb(c) == s.color));
        }
    }

    #[test]
    fn galaxy_cloud_shape() {
        let cfg = GalaxyConfig::default();
        let cloud = galaxy(&cfg, &mut rng());
        assert_eq!(cloud.len(), 15_000);
        assert_eq!(cloud.colors.as_ref().map(Vec::len), Some(15_000));
        assert_eq!(cloud.sizes.as_ref().map(Vec::len), Some(15_000));
        assert_eq!(cloud.position_data().len(), 45_000);

        let reach = 600.0 + 50.0 * 2f32.sqrt() + 1e-3;
        for p in &cloud.positions {
            assert!(Vec3::new(p.x, 0.0, p.z).length() <= reach);
            assert!(p.y.abs() <= 50.0);
        }
    }

    #[test]
    fn jitter_concentrates_near_zero() {
        let cfg = GalaxyConfig::default();
        let cloud = galaxy(&cfg, &mut rng());
        let small = cloud.positions.iter().filter(|p| p.y.abs() < 6.25).count();
        // P(u^3 < 1/8) = 1/2
        let frac = small as f32 / cloud.len() as f32;
        assert!((0.45..0.55).contains(&frac), "fraction {frac}");
    }

    #[test]
    fn nebula_inside_box() {
        let cfg = NebulaConfig::default();
        let cloud = nebula(&cfg, &mut rng());
        assert_eq!(cloud.len(), 200);
        for p in &cloud.positions {
            assert!((-400.0..=400.0).contains(&p.x));
            assert!((-200.0..=200.0).contains(&p.y));
            assert!((-400.0..=400.0).contains(&p.z));
        }
        for c in cloud.colors.as_deref().unwrap() {
            assert!(*c == rgb(CYAN) || *c == rgb(MAGENTA));
        }
        for s in cloud.sizes.as_deref().unwrap() {
            assert!((20.0..=70.0).contains(s));
        }
    }

    #[test]
    fn stars_on_shell() {
        let cfg = StarShellConfig::default();
        let cloud = star_shell(&cfg, &mut rng());
        assert_eq!(cloud.len(), 1_000);
        assert!(cloud.colors.is_none());
        assert!(cloud.sizes.is_none());
        for p in &cloud.positions {
            let d = p.length();
            assert!(d >= 800.0 - 1e-2 && d <= 1_000.0 + 1e-2, "distance {d}");
        }
    }

    #[test]
    fn same_seed_same_cloud() {
        let cfg = GalaxyConfig {
            count: 500,
            ..GalaxyConfig::default()
        };
        let a = galaxy(&cfg, &mut StdRng::seed_from_u64(42));
        let b = galaxy(&cfg, &mut StdRng::seed_from_u64(42));
        let c = galaxy(&cfg, &mut StdRng::seed_from_u64(43));
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.sizes, b.sizes);
        assert_ne!(a.positions, c.positions);
    }
}
