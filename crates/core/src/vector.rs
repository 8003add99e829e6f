//! 3D vector math and the angle helpers used by lighting and culling.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A 3D point or direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `ZERO` for a zero-length input.
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            return Vec3::ZERO;
        }
        self / len
    }

    /// Euclidean distance between two points.
    pub fn distance(a: Vec3, b: Vec3) -> f64 {
        (a - b).length()
    }

    /// Angle in degrees at `vertex` between the rays `vertex -> p2` and `vertex -> p3`.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`. If either ray has zero
    /// length the result is NaN; callers that compare against a threshold treat
    /// NaN as "fails the comparison".
    pub fn angle_at(vertex: Vec3, p2: Vec3, p3: Vec3) -> f64 {
        let ab = p2 - vertex;
        let ac = p3 - vertex;
        let cos_theta = ab.dot(ac) / (ab.length() * ac.length());
        cos_theta.clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Arithmetic mean of a set of points. Returns `ZERO` for an empty set.
    pub fn mean(points: impl IntoIterator<Item = Vec3>) -> Vec3 {
        let mut sum = Vec3::ZERO;
        let mut n = 0usize;
        for p in points {
            sum += p;
            n += 1;
        }
        if n == 0 {
            return Vec3::ZERO;
        }
        sum / n as f64
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f64) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, s: f64) -> Vec3 {
        Vec3::new(self.x / s, self.y / s, self.z / s)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vec3::new(x, y, z)
    }
}

/// A 2D image-plane coordinate or aspect vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length, i.e. distance from the projection origin.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert_relative_eq!(Vec3::distance(a, b), 5.0);
        assert_relative_eq!(Vec3::distance(b, a), 5.0);
    }

    #[test]
    fn angle_at_right_angle_and_straight_line() {
        let o = Vec3::ZERO;
        let x = Vec3::new(2.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 3.0, 0.0);
        assert_relative_eq!(Vec3::angle_at(o, x, y), 90.0, epsilon = 1e-12);
        assert_relative_eq!(Vec3::angle_at(o, x, -x), 180.0, epsilon = 1e-12);
        assert_relative_eq!(Vec3::angle_at(o, x, x * 5.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn angle_at_degenerate_ray_is_nan() {
        let o = Vec3::new(1.0, 1.0, 1.0);
        assert!(Vec3::angle_at(o, o, Vec3::ZERO).is_nan());
    }

    #[test]
    fn normalize_zero_stays_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_relative_eq!(Vec3::new(0.0, 3.0, 4.0).normalize().length(), 1.0);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn mean_of_points() {
        let m = Vec3::mean([Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0)]);
        assert_eq!(m, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::mean(std::iter::empty::<Vec3>()), Vec3::ZERO);
    }
}
