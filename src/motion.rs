//! Pointer-driven rotation smoothing and the opacity "breathing" pulse.

use crate::config::MotionConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

/// Where the pointer wants the galaxy to lean and where it currently is.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub target: Rotation,
    pub current: Rotation,
    smoothing: f64,
    tilt: f64,
}

impl Interaction {
    pub fn new(cfg: &MotionConfig) -> Self {
        Self {
            target: Rotation::default(),
            current: Rotation::default(),
            smoothing: cfg.smoothing,
            tilt: cfg.pointer_tilt,
        }
    }

    /// `nx`, `ny` in [-1,1] with +y up. Vertical pointer travel tilts around
    /// X, horizontal travel around Y.
    pub fn pointer_moved(&mut self, nx: f64, ny: f64) {
        self.target.x = ny * self.tilt;
        self.target.y = nx * self.tilt;
    }

    /// One step of exponential smoothing toward the target.
    pub fn smooth(&mut self) {
        self.current.x += (self.target.x - self.current.x) * self.smoothing;
        self.current.y += (self.target.y - self.current.y) * self.smoothing;
    }
}

pub fn opacity_pulse(now_ms: f64, cfg: &MotionConfig) -> f64 {
    cfg.pulse_base + (now_ms * cfg.pulse_rate).sin() * cfg.pulse_amplitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_right_pointer() {
        let mut it = Interaction::new(&MotionConfig::default());
        it.pointer_moved(1.0, -1.0);
        assert!((it.target.x + 0.3).abs() < 1e-12);
        assert!((it.target.y - 0.3).abs() < 1e-12);
        assert_eq!(it.current, Rotation::default());
    }

    #[test]
    fn smoothing_contracts_geometrically() {
        let mut it = Interaction::new(&MotionConfig::default());
        it.current = Rotation { x: 0.25, y: -0.1 };
        it.target = Rotation { x: -0.3, y: 0.3 };
        let d0 = ((it.current.x - it.target.x).abs(), (it.current.y - it.target.y).abs());

        let mut prev = d0;
        for n in 1..=200 {
            it.smooth();
            let d = ((it.current.x - it.target.x).abs(), (it.current.y - it.target.y).abs());
            let k = 0.95f64.powi(n);
            assert!((d.0 - d0.0 * k).abs() < 1e-12);
            assert!((d.1 - d0.1 * k).abs() < 1e-12);
            // same side of the target every frame
            assert!(it.current.x > it.target.x);
            assert!(it.current.y < it.target.y);
            assert!(d.0 <= prev.0 && d.1 <= prev.1);
            prev = d;
        }
    }

    #[test]
    fn pulse_bounds() {
        let cfg = MotionConfig::default();
        let mut t = 0.0;
        while t < 400_000.0 {
            let o = opacity_pulse(t, &cfg);
            assert!((0.4 - 1e-12..=0.8 + 1e-12).contains(&o), "t={t} o={o}");
            t += 97.3;
        }
        assert!((opacity_pulse(0.0, &cfg) - 0.6).abs() < 1e-12);
        let peak = std::f64::consts::FRAC_PI_2 / cfg.pulse_rate;
        assert!((opacity_pulse(peak, &cfg) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn pulse_bounded_for_wall_clock_values() {
        let cfg = MotionConfig::default();
        for t in [1.7e12, 1.76e12 + 12_345.0, 4.1e12] {
            let o = opacity_pulse(t, &cfg);
            assert!((0.4 - 1e-12..=0.8 + 1e-12).contains(&o));
        }
    }
}
