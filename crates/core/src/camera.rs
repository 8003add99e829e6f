//! Perspective camera.
//!
//! Rotation is stored as Euler angles in **radians**. Projection is a plain
//! perspective divide where `recording_surface.z` acts as the zoom factor and
//! `display_size` compensates for non-square character cells.

use crate::types::PROJECTION_EPSILON;
use crate::vector::{Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    /// Aspect compensation for the character cell.
    pub display_size: Vec2,
    /// Sensor extent `(x, y)` and zoom `z`.
    pub recording_surface: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            display_size: Vec2::new(1.0, 1.0),
            recording_surface: Vec3::new(1.6, 1.6, 0.5),
        }
    }
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_recording_surface(mut self, x: f64, y: f64, zoom: f64) -> Self {
        self.recording_surface = Vec3::new(x, y, zoom);
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64, z: f64) {
        self.position = Vec3::new(x, y, z);
    }

    /// Set the absolute orientation in radians.
    pub fn rotate_to(&mut self, x: f64, y: f64, z: f64) {
        self.rotation = Vec3::new(x, y, z);
    }

    /// Fit the display aspect to a `cols x rows` character grid whose cells
    /// are `char_aspect` times taller than wide.
    pub fn configure_for_viewport(&mut self, cols: u16, rows: u16, char_aspect: f64) {
        let aspect = cols.max(1) as f64 / rows.max(1) as f64;
        self.display_size.y = 1.0;
        self.display_size.x = self.display_size.y / (aspect / char_aspect);
    }

    /// Translate and rotate a world point into camera space.
    pub fn to_camera_space(&self, v: Vec3) -> Vec3 {
        let r = v - self.position;
        let (sx, cx) = self.rotation.x.sin_cos();
        let (sy, cy) = self.rotation.y.sin_cos();
        let (sz, cz) = self.rotation.z.sin_cos();

        let yaw_x = sz * r.y + cz * r.x;
        let yaw_y = cz * r.y - sz * r.x;
        let pitch_z = cy * r.z + sy * yaw_x;

        Vec3 {
            x: cy * yaw_x - sy * r.z,
            y: sx * pitch_z + cx * yaw_y,
            z: cx * pitch_z - sx * yaw_y,
        }
    }

    /// Project a world point onto the image plane.
    pub fn project_vertex(&self, v: Vec3) -> Vec2 {
        let d = self.to_camera_space(v);
        let s = self.display_size;
        let r = self.recording_surface;
        Vec2 {
            x: (d.x * s.x) / (d.z * r.x + PROJECTION_EPSILON) * r.z,
            y: (d.y * s.y) / (d.z * r.y + PROJECTION_EPSILON) * r.z,
        }
    }

    /// Project a world point to coordinates normalized by the sensor extent
    /// (roughly `[-1, 1]` on screen). The `z` component carries the
    /// camera-space depth for information only.
    pub fn project_relative(&self, v: Vec3) -> Vec3 {
        let b = self.project_vertex(v);
        let r = self.recording_surface;
        Vec3::new(b.x / r.x, b.y / r.y, self.to_camera_space(v).z)
    }
}
