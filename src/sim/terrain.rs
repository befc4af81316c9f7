//! Rolling snow terrain
//!
//! Ground height is a sum of sinusoids over world x, some of which drift
//! slowly with time. Pure functions of `(x, t)`: no state, no randomness.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Horizontal step used to estimate the surface slope
pub const NORMAL_EPSILON: f64 = 1.0;

/// One sinusoidal component of the ground profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainLayer {
    pub amplitude: f64,
    /// Spatial frequency (radians per world unit)
    pub frequency: f64,
    /// Horizontal drift speed (world units per second)
    pub drift: f64,
    /// Constant phase shift in world units
    pub offset: f64,
}

impl TerrainLayer {
    #[inline]
    fn sample(&self, x: f64, t: f64) -> f64 {
        self.amplitude * ((x + self.drift * t + self.offset) * self.frequency).sin()
    }
}

/// The ground profile (y-down: larger heights are lower on screen)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainField {
    /// Mean ground line
    pub base: f64,
    pub layers: Vec<TerrainLayer>,
}

impl Default for TerrainField {
    fn default() -> Self {
        Self {
            base: 150.0,
            layers: vec![
                TerrainLayer {
                    amplitude: 10.0,
                    frequency: 0.012,
                    drift: 18.0,
                    offset: 0.0,
                },
                TerrainLayer {
                    amplitude: 6.0,
                    frequency: 0.02,
                    drift: -9.0,
                    offset: 0.0,
                },
                TerrainLayer {
                    amplitude: 3.0,
                    frequency: 0.045,
                    drift: 0.0,
                    offset: 300.0,
                },
            ],
        }
    }
}

impl TerrainField {
    /// Ground height at world x and time t
    pub fn height_at(&self, x: f64, t: f64) -> f64 {
        self.base + self.layers.iter().map(|l| l.sample(x, t)).sum::<f64>()
    }

    /// Unit surface normal at world x and time t
    ///
    /// Estimated from the secant between `x` and `x + NORMAL_EPSILON`.
    /// On flat ground this is `(0, 1)`.
    pub fn normal_at(&self, x: f64, t: f64) -> DVec2 {
        let dy = self.height_at(x + NORMAL_EPSILON, t) - self.height_at(x, t);
        let len = NORMAL_EPSILON.hypot(dy);
        if !len.is_finite() || len <= f64::EPSILON {
            return DVec2::Y;
        }
        DVec2::new(-dy / len, NORMAL_EPSILON / len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_height_is_deterministic() {
        let terrain = TerrainField::default();
        assert_eq!(terrain.height_at(123.4, 5.6), terrain.height_at(123.4, 5.6));
    }

    #[test]
    fn test_time_drift_moves_the_profile() {
        let terrain = TerrainField::default();
        assert_ne!(terrain.height_at(50.0, 0.0), terrain.height_at(50.0, 3.0));
    }

    #[test]
    fn test_flat_field_normal_points_along_y() {
        let terrain = TerrainField {
            base: 100.0,
            layers: Vec::new(),
        };
        let n = terrain.normal_at(10.0, 0.0);
        assert!((n.x).abs() < 1e-12);
        assert!((n.y - 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_height_within_bounds(x in -1.0e6f64..1.0e6, t in 0.0f64..3600.0) {
            // 150 ± (10 + 6 + 3)
            let h = TerrainField::default().height_at(x, t);
            prop_assert!((131.0 - 1e-9..=169.0 + 1e-9).contains(&h));
        }

        #[test]
        fn prop_height_is_continuous(x in -1.0e6f64..1.0e6, t in 0.0f64..3600.0) {
            let terrain = TerrainField::default();
            let d = (terrain.height_at(x + 1e-6, t) - terrain.height_at(x, t)).abs();
            prop_assert!(d < 1e-3);
        }

        #[test]
        fn prop_normal_is_unit(x in -1.0e6f64..1.0e6, t in 0.0f64..3600.0) {
            let n = TerrainField::default().normal_at(x, t);
            prop_assert!((n.length() - 1.0).abs() < 1e-9);
            prop_assert!(n.y > 0.0);
        }
    }
}
