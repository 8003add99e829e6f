//! Scan conversion of projected faces into the character buffer.
//!
//! Faces must be drawn in the order returned by
//! [`Mesh::depth_sort_faces`](crate::mesh::Mesh::depth_sort_faces): there is no
//! depth test, later faces simply overwrite earlier ones.

use arrayvec::ArrayVec;

use crate::buffer::{CharBuffer, Coord};
use crate::camera::Camera;
use crate::face::Face;
use crate::mesh::Mesh;
use crate::ramp::Ramp;
use crate::types::BARYCENTRIC_EPSILON;
use crate::vector::Vec3;

/// Integer cell coordinate of a projected vertex. May lie off-buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i64,
    pub y: i64,
}

impl ScreenPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Barycentric inside test, boundary-inclusive.
///
/// The epsilon is added to the denominator with the denominator's own sign,
/// so both windings classify their corners as inside and zero-area triangles
/// do not divide by zero.
pub fn is_point_in_triangle(x: f64, y: f64, tri: [ScreenPoint; 3]) -> bool {
    let [a, b, c] = tri.map(|p| (p.x as f64, p.y as f64));

    let det = (b.1 - c.1) * (a.0 - c.0) + (c.0 - b.0) * (a.1 - c.1);
    let denom = det + BARYCENTRIC_EPSILON.copysign(det);

    let alpha = ((b.1 - c.1) * (x - c.0) + (c.0 - b.0) * (y - c.1)) / denom;
    let beta = ((c.1 - a.1) * (x - c.0) + (a.0 - c.0) * (y - c.1)) / denom;
    let gamma = 1.0 - alpha - beta;

    (0.0..=1.0).contains(&alpha) && (0.0..=1.0).contains(&beta) && (0.0..=1.0).contains(&gamma)
}

/// Map a world point to a cell of a `cols x rows` grid.
///
/// Relative projection gives roughly `[-1, 1]`, remapped to `[0, 1]` and
/// floored to a cell index.
pub fn project_to_cell(camera: &Camera, v: Vec3, cols: u16, rows: u16) -> ScreenPoint {
    let p = camera.project_relative(v);
    let u = (p.x + 1.0) / 2.0;
    let t = (p.y + 1.0) / 2.0;
    ScreenPoint {
        x: (u * cols as f64).floor() as i64,
        y: (t * rows as f64).floor() as i64,
    }
}

/// Fills faces into a [`CharBuffer`] with glyphs picked from a brightness ramp.
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    ramp: Ramp,
}

impl Rasterizer {
    pub fn new(ramp: Ramp) -> Self {
        Self { ramp }
    }

    pub fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    /// Draw one face and return every cell written.
    pub fn draw_face(
        &self,
        face: &Face,
        vertices: &[Vec3],
        camera: &Camera,
        buf: &mut CharBuffer,
    ) -> Vec<Coord> {
        let mut out = Vec::new();
        self.draw_face_into(face, vertices, camera, buf, &mut out);
        out
    }

    /// Draw one face, appending written cells to `out` (each cell once).
    ///
    /// Vertices that project off-buffer are skipped for the direct write but
    /// still shape the bounding box and triangles; the fill is clipped to
    /// the buffer.
    pub fn draw_face_into(
        &self,
        face: &Face,
        vertices: &[Vec3],
        camera: &Camera,
        buf: &mut CharBuffer,
        out: &mut Vec<Coord>,
    ) {
        let (cols, rows) = (buf.width(), buf.height());
        if cols == 0 || rows == 0 {
            return;
        }
        let glyph = self.ramp.glyph_for(face.light_value());

        let points: ArrayVec<ScreenPoint, 4> = face
            .positions(vertices)
            .iter()
            .map(|&v| project_to_cell(camera, v, cols, rows))
            .collect();

        let on_buffer = |p: &ScreenPoint| {
            (0..cols as i64).contains(&p.x) && (0..rows as i64).contains(&p.y)
        };

        let mut vertex_cells: ArrayVec<Coord, 4> = ArrayVec::new();
        for p in points.iter().filter(|p| on_buffer(p)) {
            let cell = (p.x as u16, p.y as u16);
            buf.paint(cell.0, cell.1, glyph);
            if !vertex_cells.contains(&cell) {
                vertex_cells.push(cell);
                out.push(cell);
            }
        }

        let triangles: ArrayVec<[ScreenPoint; 3], 2> = face
            .corners()
            .triangles()
            .iter()
            .map(|&t| t.map(|k| points[k]))
            .collect();

        let min_x = points.iter().map(|p| p.x).min().unwrap_or(0).max(0);
        let max_x = points.iter().map(|p| p.x).max().unwrap_or(-1).min(cols as i64 - 1);
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(-1).min(rows as i64 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let inside = triangles
                    .iter()
                    .any(|&tri| is_point_in_triangle(x as f64, y as f64, tri));
                if !inside {
                    continue;
                }
                let cell = (x as u16, y as u16);
                buf.paint(cell.0, cell.1, glyph);
                if !vertex_cells.contains(&cell) {
                    out.push(cell);
                }
            }
        }
    }

    /// Depth-sort, optionally cull, and draw every face of a mesh in paint
    /// order. Returns the number of faces drawn.
    pub fn draw_mesh(
        &self,
        mesh: &Mesh,
        camera: &Camera,
        cull_threshold: Option<f64>,
        buf: &mut CharBuffer,
        out: &mut Vec<Coord>,
    ) -> usize {
        let faces = mesh.depth_sort_faces(camera, cull_threshold);
        for face in &faces {
            self.draw_face_into(face, mesh.vertices(), camera, buf, out);
        }
        faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;

    fn tri(a: (i64, i64), b: (i64, i64), c: (i64, i64)) -> [ScreenPoint; 3] {
        [
            ScreenPoint::new(a.0, a.1),
            ScreenPoint::new(b.0, b.1),
            ScreenPoint::new(c.0, c.1),
        ]
    }

    #[test]
    fn triangle_corners_are_inside_for_both_windings() {
        for t in [
            tri((0, 0), (10, 0), (0, 10)),
            tri((0, 0), (0, 10), (10, 0)),
            tri((3, 7), (-4, 2), (12, -9)),
        ] {
            for p in t {
                assert!(is_point_in_triangle(p.x as f64, p.y as f64, t), "{p:?} in {t:?}");
            }
        }
    }

    #[test]
    fn far_point_is_outside() {
        let t = tri((0, 0), (10, 0), (0, 10));
        assert!(is_point_in_triangle(2.0, 2.0, t));
        assert!(!is_point_in_triangle(100.0, 100.0, t));
        assert!(!is_point_in_triangle(-50.0, 3.0, t));
        assert!(!is_point_in_triangle(6.0, 6.0, t));
    }

    #[test]
    fn degenerate_triangle_does_not_panic() {
        let t = tri((0, 0), (5, 5), (10, 10));
        assert!(is_point_in_triangle(5.0, 5.0, t));
        assert!(!is_point_in_triangle(5.0, 0.0, t));
    }

    /// A camera looking at a flat quad in the z = 0 plane.
    fn quad_scene(half: f64) -> (Vec<Vec3>, Face, Camera) {
        let vertices = vec![
            Vec3::new(-half, -half, 0.0),
            Vec3::new(half, -half, 0.0),
            Vec3::new(half, half, 0.0),
            Vec3::new(-half, half, 0.0),
        ];
        let mut face = Face::quad(0, 1, 2, 3);
        face.calculate_center(&vertices);
        face.set_light_value(1.0);
        let camera = Camera::new(Vec3::new(0.0, 0.0, -2.0)).with_recording_surface(1.0, 1.0, 1.0);
        (vertices, face, camera)
    }

    #[test]
    fn quad_fills_its_bounding_box() {
        let (vertices, face, camera) = quad_scene(1.0);
        let ramp = Ramp::new([' ', '#']).unwrap();
        let raster = Rasterizer::new(ramp);
        let mut buf = CharBuffer::new(20, 20);

        let written = raster.draw_face(&face, &vertices, &camera, &mut buf);

        // Corners project just inside +-0.5 -> cells 5 and 14.
        assert_eq!(buf.get(5, 5), Some('#'));
        assert_eq!(buf.get(14, 14), Some('#'));
        assert_eq!(buf.get(10, 10), Some('#'));
        assert_eq!(buf.get(4, 10), None);
        assert_eq!(buf.get(15, 10), None);
        assert_eq!(written.len(), 10 * 10);

        let mut unique = written.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), written.len());
    }

    #[test]
    fn glyph_follows_clamped_light_value() {
        let (vertices, mut face, camera) = quad_scene(1.0);
        let raster = Rasterizer::new(Ramp::new(" .:#".chars()).unwrap());
        let mut buf = CharBuffer::new(20, 20);

        face.set_light_value(0.5);
        raster.draw_face(&face, &vertices, &camera, &mut buf);
        assert_eq!(buf.get(10, 10), Some('.'));

        face.set_light_value(7.0);
        raster.draw_face(&face, &vertices, &camera, &mut buf);
        assert_eq!(buf.get(10, 10), Some('#'));
    }

    #[test]
    fn off_buffer_vertices_are_clipped() {
        // Large quad: every corner projects outside the buffer.
        let (vertices, face, camera) = quad_scene(10.0);
        let raster = Rasterizer::new(Ramp::new([' ', '#']).unwrap());
        let mut buf = CharBuffer::new(8, 6);

        let written = raster.draw_face(&face, &vertices, &camera, &mut buf);
        assert_eq!(written.len(), 8 * 6);
        assert!(buf.cells().iter().all(|c| *c == Some('#')));
    }

    #[test]
    fn draw_mesh_paints_near_face_last() {
        let mut cube = factory::cube(2.0).unwrap();
        let camera = Camera::new(Vec3::new(0.0, 0.0, -10.0)).with_recording_surface(1.0, 1.0, 1.0);
        cube.apply_light_source(Vec3::new(10.0, -10.0, -10.0), 2.0);
        let raster = Rasterizer::default();
        let mut buf = CharBuffer::new(40, 40);
        let mut out = Vec::new();

        let drawn = raster.draw_mesh(&cube, &camera, None, &mut buf, &mut out);
        assert_eq!(drawn, 6);

        let front = cube
            .faces()
            .iter()
            .find(|f| f.unit_normal().z < -0.99)
            .unwrap();
        let expected = raster.ramp().glyph_for(front.light_value());
        assert_eq!(buf.get(20, 20), Some(expected));
    }
}
