//! Built-in mesh generators.

use std::f64::consts::TAU;

use crate::error::Result;
use crate::face::Face;
use crate::mesh::Mesh;
use crate::vector::Vec3;

/// Axis-aligned cube of edge `size` centered at the origin (8 vertices, 6 quads).
pub fn cube(size: f64) -> Result<Mesh> {
    let h = size / 2.0;
    let vertices = vec![
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];
    let faces = vec![
        Face::quad(0, 1, 2, 3),
        Face::quad(4, 5, 6, 7),
        Face::quad(0, 1, 5, 4),
        Face::quad(2, 3, 7, 6),
        Face::quad(1, 2, 6, 5),
        Face::quad(0, 3, 7, 4),
    ];
    Mesh::new("cube", vertices, faces)
}

/// Torus around the Z axis with ring radius `major` and tube radius `minor`.
///
/// Vertices form a `resolution x resolution` grid indexed `[i][j]` (stored
/// at `i * resolution + j`), where `i` walks around the ring and `j` around
/// the tube. Each quad joins `[i][j]`, `[i][j+1]`, `[i+1][j+1]`, `[i+1][j]`
/// with indices wrapping at the grid boundary.
pub fn toroid(major: f64, minor: f64, resolution: usize) -> Result<Mesh> {
    let n = resolution;
    let at = |i: usize, j: usize| (i % n) * n + (j % n);

    let mut vertices = Vec::with_capacity(n * n);
    for i in 0..n {
        let theta = TAU * i as f64 / n as f64;
        for j in 0..n {
            let phi = TAU * j as f64 / n as f64;
            let ring = major + minor * phi.cos();
            vertices.push(Vec3::new(
                ring * theta.cos(),
                ring * theta.sin(),
                minor * phi.sin(),
            ));
        }
    }

    let mut faces = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            faces.push(Face::quad(at(i, j), at(i, j + 1), at(i + 1, j + 1), at(i + 1, j)));
        }
    }

    Mesh::new("toroid", vertices, faces)
}

/// Square pyramid of base edge and height `size` around the Y axis. The
/// apex sits at `-Y`, which the camera maps towards the top rows of the
/// terminal.
pub fn pyramid(size: f64) -> Result<Mesh> {
    let h = size / 2.0;
    let vertices = vec![
        Vec3::new(-h, h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
        Vec3::new(0.0, -h, 0.0),
    ];
    let faces = vec![
        Face::triangle(0, 1, 4),
        Face::triangle(1, 2, 4),
        Face::triangle(2, 3, 4),
        Face::triangle(3, 0, 4),
        Face::quad(0, 1, 2, 3),
    ];
    Mesh::new("pyramid", vertices, faces)
}
