//! Planar triangle/quad faces.
//!
//! A face does not own vertex storage. It holds indices into the vertex arena
//! of the mesh it belongs to, so moving one shared vertex updates every face
//! that uses it. Every method that touches geometry therefore takes the arena
//! as an argument.

use arrayvec::ArrayVec;

use crate::error::{GeometryError, Result};
use crate::rotation::Orientation;
use crate::types::NORMAL_OFFSET;
use crate::vector::Vec3;

/// Vertex indices of a face, in winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corners {
    Tri([usize; 3]),
    Quad([usize; 4]),
}

impl Corners {
    /// Build from a slice of 3 or 4 indices.
    pub fn from_slice(indices: &[usize]) -> Result<Self> {
        match *indices {
            [a, b, c] => Ok(Corners::Tri([a, b, c])),
            [a, b, c, d] => Ok(Corners::Quad([a, b, c, d])),
            _ => Err(GeometryError::MalformedFace {
                vertices: indices.len(),
            }),
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        match self {
            Corners::Tri(i) => i,
            Corners::Quad(i) => i,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Split into triangles for filling. A quad `v0 v1 v2 v3` becomes
    /// `(v0, v1, v2)` and `(v2, v3, v0)`. The returned values are positions
    /// within the corner list, not arena indices.
    pub fn triangles(&self) -> ArrayVec<[usize; 3], 2> {
        let mut out = ArrayVec::new();
        out.push([0, 1, 2]);
        if let Corners::Quad(_) = self {
            out.push([2, 3, 0]);
        }
        out
    }
}

/// A planar polygon with derived center, outward normal and light value.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    corners: Corners,
    center: Vec3,
    /// Point `NORMAL_OFFSET` away from `center` along the outward unit normal.
    normal: Vec3,
    rotation: Orientation,
    light_value: f64,
    force_normal_flip: bool,
}

impl Face {
    pub fn new(corners: Corners) -> Self {
        Self {
            corners,
            center: Vec3::ZERO,
            normal: Vec3::ZERO,
            rotation: Orientation::default(),
            light_value: 0.0,
            force_normal_flip: false,
        }
    }

    pub fn triangle(a: usize, b: usize, c: usize) -> Self {
        Self::new(Corners::Tri([a, b, c]))
    }

    pub fn quad(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self::new(Corners::Quad([a, b, c, d]))
    }

    /// Build from a list of indices, rejecting anything but 3 or 4 of them.
    pub fn from_indices(indices: &[usize]) -> Result<Self> {
        Corners::from_slice(indices).map(Self::new)
    }

    /// Mark this face as wound against the convex-hull heuristic (e.g. a
    /// pyramid base): its normal is flipped after orientation.
    pub fn with_normal_flip(mut self) -> Self {
        self.force_normal_flip = true;
        self
    }

    pub fn corners(&self) -> Corners {
        self.corners
    }

    pub fn indices(&self) -> &[usize] {
        self.corners.as_slice()
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// The normal anchor point (`center + unit_normal * NORMAL_OFFSET`).
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Unit outward normal, or zero for degenerate faces.
    pub fn unit_normal(&self) -> Vec3 {
        (self.normal - self.center) / NORMAL_OFFSET
    }

    pub fn rotation(&self) -> Orientation {
        self.rotation
    }

    pub fn light_value(&self) -> f64 {
        self.light_value
    }

    pub fn set_light_value(&mut self, value: f64) {
        self.light_value = value;
    }

    pub fn force_normal_flip(&self) -> bool {
        self.force_normal_flip
    }

    /// Current corner positions.
    ///
    /// Panics if an index is outside `vertices`; meshes validate indices on
    /// construction.
    pub fn positions(&self, vertices: &[Vec3]) -> ArrayVec<Vec3, 4> {
        self.indices().iter().map(|&i| vertices[i]).collect()
    }

    pub fn calculate_center(&mut self, vertices: &[Vec3]) {
        self.center = Vec3::mean(self.positions(vertices));
    }

    /// Recompute the normal from the first three corners.
    ///
    /// With a `reference_center` (a point inside a convex body) the normal is
    /// flipped when it points towards it. `force_normal_flip` flips it once
    /// more afterwards. Colinear corners give a zero normal, so the stored
    /// anchor coincides with `center`.
    pub fn calculate_normal(&mut self, vertices: &[Vec3], reference_center: Option<Vec3>) {
        let [a, b, c] = [0, 1, 2].map(|k| vertices[self.indices()[k]]);
        let mut n = (b - a).cross(c - a).normalize();

        if let Some(reference) = reference_center {
            if n.dot(reference - self.center) > 0.0 {
                n = -n;
            }
        }
        if self.force_normal_flip {
            n = -n;
        }

        self.normal = self.center + n * NORMAL_OFFSET;
    }

    /// Translate the face so its center lands on `target`.
    ///
    /// Shared vertices move too; sibling faces must refresh their centers.
    pub fn move_to(&mut self, vertices: &mut [Vec3], target: Vec3) {
        let delta = target - self.center;
        for &i in self.corners.as_slice() {
            vertices[i] += delta;
        }
        self.normal += delta;
        self.center = target;
    }

    /// Rotate the face about its own center to the given absolute angles
    /// (degrees). Only the change from the stored angles is applied.
    pub fn rotate_to(
        &mut self,
        vertices: &mut [Vec3],
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    ) {
        let rotation = self.rotation.advance(x, y, z);
        if rotation.is_identity() {
            return;
        }
        let pivot = self.center;
        for &i in self.corners.as_slice() {
            vertices[i] = rotation.apply_about(vertices[i], pivot);
        }
        self.normal = rotation.apply_about(self.normal, pivot);
    }

    pub(crate) fn set_normal_anchor(&mut self, anchor: Vec3) {
        self.normal = anchor;
    }
}
