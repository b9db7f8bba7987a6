//! Soft round sprite every point is drawn with.

/// Gradient stops as (offset, alpha). Matches a canvas radial gradient from
/// the center to the inscribed circle.
const STOPS: [(f32, f32); 3] = [(0.0, 1.0), (0.5, 0.5), (1.0, 0.0)];

/// Square RGBA8 raster, row major, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteTexture {
    size: u32,
    pixels: Vec<u8>,
}

impl SpriteTexture {
    pub const DEFAULT_SIZE: u32 = 64;

    /// White disc fading from opaque at the center to transparent at the edge.
    pub fn radial(size: u32) -> Self {
        let size = size.max(1);
        let half = size as f32 / 2.0;
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);

        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 + 0.5 - half;
                let dy = y as f32 + 0.5 - half;
                let t = (dx * dx + dy * dy).sqrt() / half;
                let a = (gradient_alpha(t) * 255.0).round() as u8;
                pixels.extend_from_slice(&[255, 255, 255, a]);
            }
        }

        Self { size, pixels }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixels[((y * self.size + x) * 4 + 3) as usize]
    }
}

impl Default for SpriteTexture {
    fn default() -> Self {
        Self::radial(Self::DEFAULT_SIZE)
    }
}

/// Piecewise linear alpha at normalized distance `t` from the center.
fn gradient_alpha(t: f32) -> f32 {
    if t <= STOPS[0].0 {
        return STOPS[0].1;
    }
    for pair in STOPS.windows(2) {
        let (t0, a0) = pair[0];
        let (t1, a1) = pair[1];
        if t <= t1 {
            return a0 + (a1 - a0) * (t - t0) / (t1 - t0);
        }
    }
    STOPS[STOPS.len() - 1].1
}
