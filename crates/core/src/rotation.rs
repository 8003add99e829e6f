//! Absolute-angle rotation state and the Z-Y-X rotation it produces.
//!
//! Faces and meshes remember the last absolute angle set on each axis. A
//! `rotate_to` call only applies the difference to that stored angle, so
//! setting the same orientation twice moves nothing.

use crate::vector::Vec3;

/// Last absolute angle applied on each axis, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Orientation {
    /// Store the new absolute angles and return the rotation that takes the
    /// previous orientation to the new one. `None` leaves an axis untouched.
    pub fn advance(&mut self, x: Option<f64>, y: Option<f64>, z: Option<f64>) -> AxisRotation {
        let mut delta = [0.0f64; 3];
        if let Some(x) = x {
            delta[0] = (x - self.x).to_radians();
            self.x = x;
        }
        if let Some(y) = y {
            delta[1] = (y - self.y).to_radians();
            self.y = y;
        }
        if let Some(z) = z {
            delta[2] = (z - self.z).to_radians();
            self.z = z;
        }
        AxisRotation::from_radians(delta[0], delta[1], delta[2])
    }
}

/// Incremental rotation about the X, Y and Z axes, applied in Z, Y, X order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    sin: Vec3,
    cos: Vec3,
}

impl Default for AxisRotation {
    fn default() -> Self {
        Self::from_radians(0.0, 0.0, 0.0)
    }
}

impl AxisRotation {
    pub fn from_radians(x: f64, y: f64, z: f64) -> Self {
        Self {
            sin: Vec3::new(x.sin(), y.sin(), z.sin()),
            cos: Vec3::new(x.cos(), y.cos(), z.cos()),
        }
    }

    pub fn from_degrees(x: f64, y: f64, z: f64) -> Self {
        Self::from_radians(x.to_radians(), y.to_radians(), z.to_radians())
    }

    pub fn is_identity(&self) -> bool {
        self.sin == Vec3::ZERO
    }

    /// Rotate a vector about the origin.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let Vec3 { mut x, mut y, mut z } = v;

        // Z axis (x, y)
        let (nx, ny) = (
            x * self.cos.z - y * self.sin.z,
            x * self.sin.z + y * self.cos.z,
        );
        x = nx;
        y = ny;

        // Y axis (x, z)
        let (nx, nz) = (
            x * self.cos.y + z * self.sin.y,
            -x * self.sin.y + z * self.cos.y,
        );
        x = nx;
        z = nz;

        // X axis (y, z)
        let (ny, nz) = (
            y * self.cos.x - z * self.sin.x,
            y * self.sin.x + z * self.cos.x,
        );

        Vec3::new(x, ny, nz)
    }

    /// Rotate a point about `pivot`.
    pub fn apply_about(&self, p: Vec3, pivot: Vec3) -> Vec3 {
        self.apply(p - pivot) + pivot
    }
}
