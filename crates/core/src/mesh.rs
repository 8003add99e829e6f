//! Meshes: a vertex arena plus the faces that index into it.
//!
//! Rotation and translation mutate the arena once; faces read positions
//! through their indices. The mesh center is only recomputed on request
//! ([`Mesh::update_center`]); rigid rotation about the center does not move it.

use crate::camera::Camera;
use crate::error::{GeometryError, Result};
use crate::face::Face;
use crate::light::LightSource;
use crate::rotation::{AxisRotation, Orientation};
use crate::vector::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    /// Arena indices referenced by at least one face, ascending.
    unique: Vec<usize>,
    faces: Vec<Face>,
    center: Vec3,
    rotation: Orientation,
}

impl Mesh {
    /// Build a mesh, validating face indices, then derive face centers, the
    /// mesh center and outward face normals.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self> {
        if faces.is_empty() {
            return Err(GeometryError::EmptyMesh);
        }

        let mut unique: Vec<usize> = Vec::with_capacity(vertices.len());
        for face in &faces {
            for &index in face.indices() {
                if index >= vertices.len() {
                    return Err(GeometryError::VertexOutOfRange {
                        index,
                        len: vertices.len(),
                    });
                }
                unique.push(index);
            }
        }
        unique.sort_unstable();
        unique.dedup();

        let mut mesh = Self {
            name: name.into(),
            vertices,
            unique,
            faces,
            center: Vec3::ZERO,
            rotation: Orientation::default(),
        };
        mesh.refresh_face_centers();
        mesh.update_center();
        mesh.recalculate_normals();
        Ok(mesh)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of distinct vertices used by the faces.
    pub fn unique_vertex_count(&self) -> usize {
        self.unique.len()
    }

    pub fn unique_vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.unique.iter().map(|&i| self.vertices[i])
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn rotation(&self) -> Orientation {
        self.rotation
    }

    /// Mean of the unique vertex positions.
    pub fn calculate_center(&self) -> Vec3 {
        Vec3::mean(self.unique_vertices())
    }

    pub fn update_center(&mut self) {
        self.center = self.calculate_center();
    }

    /// Recompute every face's center from the arena.
    pub fn refresh_face_centers(&mut self) {
        for face in &mut self.faces {
            face.calculate_center(&self.vertices);
        }
    }

    /// Recompute every face normal, oriented away from the mesh center.
    pub fn recalculate_normals(&mut self) {
        let center = self.center;
        for face in &mut self.faces {
            face.calculate_normal(&self.vertices, Some(center));
        }
    }

    /// Rotate the whole body about its center to the given absolute angles
    /// (degrees). Only the change from the stored angles is applied, in
    /// Z, Y, X order.
    pub fn rotate_to(&mut self, x: Option<f64>, y: Option<f64>, z: Option<f64>) {
        let rotation = self.rotation.advance(x, y, z);
        if rotation.is_identity() {
            return;
        }
        self.apply_rotation(&rotation);
    }

    fn apply_rotation(&mut self, rotation: &AxisRotation) {
        let pivot = self.center;
        for &i in &self.unique {
            self.vertices[i] = rotation.apply_about(self.vertices[i], pivot);
        }
        for face in &mut self.faces {
            face.set_normal_anchor(rotation.apply_about(face.normal(), pivot));
        }
        self.refresh_face_centers();
    }

    /// Translate the whole body so its center lands on `target`.
    pub fn move_to(&mut self, target: Vec3) {
        let delta = target - self.center;
        for &i in &self.unique {
            self.vertices[i] += delta;
        }
        for face in &mut self.faces {
            face.set_normal_anchor(face.normal() + delta);
        }
        self.refresh_face_centers();
        self.center = target;
    }

    /// Move a single face so its center lands on `target`. Vertices shared
    /// with neighbouring faces move with it.
    pub fn move_face(&mut self, index: usize, target: Vec3) -> Result<()> {
        let len = self.faces.len();
        let face = self
            .faces
            .get_mut(index)
            .ok_or(GeometryError::FaceOutOfRange { index, len })?;
        face.move_to(&mut self.vertices, target);
        self.refresh_after_face_edit(index);
        Ok(())
    }

    /// Rotate a single face about its own center to absolute angles (degrees).
    pub fn rotate_face(
        &mut self,
        index: usize,
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    ) -> Result<()> {
        let len = self.faces.len();
        let face = self
            .faces
            .get_mut(index)
            .ok_or(GeometryError::FaceOutOfRange { index, len })?;
        face.rotate_to(&mut self.vertices, x, y, z);
        self.refresh_after_face_edit(index);
        Ok(())
    }

    /// Refresh every face center, then recompute the normals of the faces
    /// sharing a vertex with face `edited`. The edited face keeps the normal
    /// it carried through its own transform.
    fn refresh_after_face_edit(&mut self, edited: usize) {
        self.refresh_face_centers();
        let moved = self.faces[edited].indices().to_vec();
        let center = self.center;
        for (i, face) in self.faces.iter_mut().enumerate() {
            if i != edited && face.indices().iter().any(|v| moved.contains(v)) {
                face.calculate_normal(&self.vertices, Some(center));
            }
        }
    }

    /// Sum of distances from each corner of `face` to `point`.
    pub fn distance_key(&self, face: &Face, point: Vec3) -> f64 {
        face.positions(&self.vertices)
            .iter()
            .map(|&v| Vec3::distance(v, point))
            .sum()
    }

    /// Faces in back-to-front paint order (painter's algorithm).
    ///
    /// Faces are sorted by the sum of their corner distances to the camera,
    /// farthest first. With `cull_threshold` (degrees) a face is kept only if
    /// the angle at its center between its normal and the camera is below the
    /// threshold. This is a view-dependent heuristic, not exact occlusion:
    /// non-convex bodies can still paint over themselves.
    pub fn depth_sort_faces(&self, camera: &Camera, cull_threshold: Option<f64>) -> Vec<&Face> {
        let eye = camera.position;
        let mut keyed: Vec<(f64, &Face)> = self
            .faces
            .iter()
            .filter(|face| match cull_threshold {
                Some(threshold) => Vec3::angle_at(face.center(), face.normal(), eye) < threshold,
                None => true,
            })
            .map(|face| (self.distance_key(face, eye), face))
            .collect();
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        keyed.into_iter().map(|(_, face)| face).collect()
    }

    /// Recompute every face's light value from a point light.
    pub fn apply_light(&mut self, light: &LightSource) {
        for face in &mut self.faces {
            let value = light.intensity_at(face.center(), face.normal());
            face.set_light_value(value);
        }
    }

    /// [`Mesh::apply_light`] with the default falloff and intensity clamp.
    pub fn apply_light_source(&mut self, source: Vec3, intensity: f64) {
        self.apply_light(&LightSource::new(source, intensity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;
    use approx::assert_abs_diff_eq;

    fn two_triangles_sharing_an_edge() -> Mesh {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            // Not referenced by any face.
            Vec3::new(100.0, 100.0, 100.0),
        ];
        let faces = vec![Face::triangle(0, 1, 2), Face::triangle(1, 3, 2)];
        Mesh::new("pair", vertices, faces).unwrap()
    }

    #[test]
    fn rejects_empty_and_out_of_range() {
        assert_eq!(
            Mesh::new("empty", vec![Vec3::ZERO], vec![]),
            Err(GeometryError::EmptyMesh)
        );
        assert_eq!(
            Mesh::new("bad", vec![Vec3::ZERO; 3], vec![Face::triangle(0, 1, 3)]),
            Err(GeometryError::VertexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn center_uses_deduplicated_referenced_vertices() {
        let mesh = two_triangles_sharing_an_edge();
        assert_eq!(mesh.unique_vertex_count(), 4);
        assert_eq!(mesh.center(), Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn shared_vertex_moves_both_faces() {
        let mut mesh = two_triangles_sharing_an_edge();
        mesh.move_face(0, Vec3::new(1.0 / 3.0 + 1.0, 1.0 / 3.0, 0.0)).unwrap();
        // Vertex 1 is shared; face 1 must see its new position.
        let face1 = mesh.faces()[1].clone();
        let mut check = face1.clone();
        check.calculate_center(mesh.vertices());
        assert_eq!(check.center(), face1.center());
        assert_abs_diff_eq!(mesh.vertices()[1].x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn face_operations_reject_bad_index() {
        let mut mesh = two_triangles_sharing_an_edge();
        assert_eq!(
            mesh.rotate_face(9, Some(10.0), None, None),
            Err(GeometryError::FaceOutOfRange { index: 9, len: 2 })
        );
    }

    #[test]
    fn rotate_keeps_center_and_normals_consistent() {
        let mut cube = factory::cube(2.0).unwrap();
        cube.rotate_to(Some(33.0), Some(-71.0), Some(12.5));

        assert_abs_diff_eq!(cube.calculate_center().length(), 0.0, epsilon = 1e-12);
        for face in cube.faces() {
            let mut fresh = face.clone();
            fresh.calculate_center(cube.vertices());
            fresh.calculate_normal(cube.vertices(), Some(cube.center()));
            let a = face.unit_normal();
            let b = fresh.unit_normal();
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
            assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn move_to_translates_body() {
        let mut cube = factory::cube(2.0).unwrap();
        cube.move_to(Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(cube.center(), Vec3::new(3.0, 0.0, 0.0));
        assert_abs_diff_eq!(cube.calculate_center().x, 3.0, epsilon = 1e-12);
        for face in cube.faces() {
            assert_abs_diff_eq!(Vec3::distance(face.center(), face.normal()), 0.01, epsilon = 1e-12);
        }
    }

    #[test]
    fn culling_keeps_only_camera_facing_cube_faces() {
        let cube = factory::cube(2.0).unwrap();
        let camera = Camera::new(Vec3::new(0.0, 0.0, -10.0));
        let visible = cube.depth_sort_faces(&camera, Some(90.0));
        assert_eq!(visible.len(), 1);
        assert!(visible[0].unit_normal().z < -0.99);

        let all = cube.depth_sort_faces(&camera, None);
        assert_eq!(all.len(), 6);
        // Nearest face is painted last.
        assert!(all[5].unit_normal().z < -0.99);
    }

    #[test]
    fn light_is_brighter_closer() {
        let mut near = factory::cube(2.0).unwrap();
        let mut far = near.clone();
        near.apply_light_source(Vec3::new(0.0, 0.0, -5.0), 1.0);
        far.apply_light_source(Vec3::new(0.0, 0.0, -50.0), 1.0);
        for (a, b) in near.faces().iter().zip(far.faces()) {
            assert!(a.light_value() >= b.light_value());
        }
        let total = |m: &Mesh| m.faces().iter().map(|f| f.light_value()).sum::<f64>();
        assert!(total(&near) > total(&far));
    }

    #[test]
    fn face_edits_refresh_neighbour_normals() {
        let mut cube = factory::cube(2.0).unwrap();
        cube.move_face(0, Vec3::new(0.0, 0.0, -3.0)).unwrap();
        cube.rotate_face(1, None, None, Some(45.0)).unwrap();

        for (i, face) in cube.faces().iter().enumerate() {
            assert_abs_diff_eq!(
                Vec3::distance(face.normal(), face.center()),
                crate::types::NORMAL_OFFSET,
                epsilon = 1e-9
            );
            if i == 1 {
                continue;
            }
            let mut fresh = face.clone();
            fresh.calculate_normal(cube.vertices(), Some(cube.center()));
            let (a, b) = (face.unit_normal(), fresh.unit_normal());
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
            assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-9);
        }
    }
}
