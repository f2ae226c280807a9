//! The immutable per-frame parameter snapshot handed to the renderer.
//!
//! A [`Parameters`] value is created fresh on every update pass and never
//! mutated afterwards; consumers compare snapshots to skip redundant renders.

use colorwash_core::Lab;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Default distance-falloff bias.
pub const DEFAULT_BIAS: f64 = 0.01;
/// Default distance-falloff power.
pub const DEFAULT_POWER: f64 = 4.0;
/// Default dithering noise amount.
pub const DEFAULT_NOISE: f64 = 0.0;

/// One positioned gradient color: a speckle's current interpolated color at
/// its current spring position, both frozen at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position in normalized gradient space, [0, 1]².
    pub position: DVec2,
    /// Color in LAB, the renderer's working space.
    pub color: Lab,
}

/// Immutable output snapshot consumed by the rendering backend each frame.
///
/// `points` holds one stop per *enabled* speckle, in slot order. The three
/// scalars shape the renderer's distance-weighted blend; they pass through
/// this engine untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub points: Vec<ColorStop>,
    pub bias: f64,
    pub power: f64,
    pub noise: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            bias: DEFAULT_BIAS,
            power: DEFAULT_POWER,
            noise: DEFAULT_NOISE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(x: f64, y: f64, l: f64) -> ColorStop {
        ColorStop {
            position: DVec2::new(x, y),
            color: Lab { l, a: 0.0, b: 0.0 },
        }
    }

    #[test]
    fn default_has_no_points_and_documented_scalars() {
        let p = Parameters::default();
        assert!(p.points.is_empty());
        assert_eq!(p.bias, DEFAULT_BIAS);
        assert_eq!(p.power, DEFAULT_POWER);
        assert_eq!(p.noise, DEFAULT_NOISE);
    }

    #[test]
    fn equality_detects_identical_snapshots() {
        let a = Parameters {
            points: vec![stop(0.25, 0.75, 50.0)],
            ..Parameters::default()
        };
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn equality_detects_moved_point() {
        let a = Parameters {
            points: vec![stop(0.25, 0.75, 50.0)],
            ..Parameters::default()
        };
        let b = Parameters {
            points: vec![stop(0.26, 0.75, 50.0)],
            ..Parameters::default()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn equality_detects_scalar_change() {
        let a = Parameters::default();
        let b = Parameters {
            noise: 0.5,
            ..Parameters::default()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn json_round_trip() {
        let original = Parameters {
            points: vec![stop(0.1, 0.9, 53.2), stop(0.5, 0.5, 87.7)],
            bias: 0.02,
            power: 4.0,
            noise: 0.1,
        };
        let json = serde_json::to_string(&original).unwrap();
        let restored: Parameters = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
