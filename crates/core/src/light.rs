//! Single point light with distance falloff.

use crate::types::DEFAULT_LIGHT_FALLOFF;
use crate::vector::Vec3;

/// A point light. `falloff` and `clamp_intensity` are tunables, not invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    pub position: Vec3,
    pub intensity: f64,
    /// Distance multiplier `k` in `intensity / (distance * k)`.
    pub falloff: f64,
    /// Clamp `intensity` to 1 before the falloff is applied.
    pub clamp_intensity: bool,
}

impl LightSource {
    pub fn new(position: Vec3, intensity: f64) -> Self {
        Self {
            position,
            intensity,
            falloff: DEFAULT_LIGHT_FALLOFF,
            clamp_intensity: true,
        }
    }

    pub fn with_falloff(mut self, falloff: f64) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn with_clamp(mut self, clamp_intensity: bool) -> Self {
        self.clamp_intensity = clamp_intensity;
        self
    }

    /// Light value for a face with the given center and normal anchor point.
    ///
    /// `intensity / (d * falloff) * (angle / 180)` where `d` is the distance
    /// from the face center to the light and `angle` is the angle at the
    /// center between the normal anchor and the light. The result is not
    /// clamped; the brightness ramp clamps on lookup.
    pub fn intensity_at(&self, center: Vec3, normal: Vec3) -> f64 {
        let intensity = if self.clamp_intensity {
            self.intensity.min(1.0)
        } else {
            self.intensity
        };
        let d = Vec3::distance(center, self.position);
        let angle = Vec3::angle_at(center, normal, self.position);
        intensity / (d * self.falloff) * (angle / 180.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamps_intensity_above_one_by_default() {
        let center = Vec3::ZERO;
        let normal = Vec3::new(0.0, 0.0, 0.01);
        let light = Vec3::new(10.0, 0.0, 0.0);
        let strong = LightSource::new(light, 5.0).intensity_at(center, normal);
        let unit = LightSource::new(light, 1.0).intensity_at(center, normal);
        assert_relative_eq!(strong, unit);

        let unclamped = LightSource::new(light, 5.0)
            .with_clamp(false)
            .intensity_at(center, normal);
        assert_relative_eq!(unclamped, unit * 5.0);
    }

    #[test]
    fn formula_matches_falloff_and_angle_terms() {
        // Light at a right angle to the normal, 10 units away.
        let value = LightSource::new(Vec3::new(10.0, 0.0, 0.0), 1.0)
            .with_falloff(0.1)
            .intensity_at(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.01));
        assert_relative_eq!(value, 1.0 / (10.0 * 0.1) * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn value_decreases_with_distance() {
        let center = Vec3::ZERO;
        let normal = Vec3::new(0.0, 0.01, 0.0);
        let mut last = f64::INFINITY;
        for d in [1.0, 2.0, 4.0, 8.0, 16.0] {
            let v = LightSource::new(Vec3::new(d, d, 0.0), 1.0).intensity_at(center, normal);
            assert!(v < last, "{v} should be below {last}");
            last = v;
        }
    }
}
