//! Geometry core: pure, deterministic and testable
//!
//! This crate holds everything needed to turn a mesh into characters. It has
//! **no dependencies** on the terminal, timing or input, so it can run:
//!
//! - **Headless**: rasterize into a [`CharBuffer`] and inspect the cells
//! - **In benchmarks**: the full pipeline is a handful of plain function calls
//! - **Anywhere**: the terminal front end only flushes the buffer
//!
//! # Module Structure
//!
//! - [`vector`]: `Vec3`/`Vec2` arithmetic, distances and angles
//! - [`rotation`]: Euler rotation applied Z, then Y, then X
//! - [`face`]: triangles and quads indexing a shared vertex arena
//! - [`mesh`]: vertex arena, whole-body transforms, depth sort and culling
//! - [`factory`]: built-in cube, toroid and pyramid
//! - [`camera`]: extrinsic rotation and perspective projection
//! - [`light`]: point light with distance falloff
//! - [`ramp`]: brightness to glyph lookup
//! - [`buffer`]: character grid with per-frame change tracking
//! - [`raster`]: barycentric scan conversion of faces
//!
//! # Pipeline
//!
//! One frame is: light the mesh, depth-sort its faces against the camera
//! (optionally culling back faces), then rasterize each face in that order.
//! There is no depth buffer; later faces overwrite earlier ones.
//!
//! # Example
//!
//! ```
//! use term3d_core::{factory, Camera, CharBuffer, LightSource, Rasterizer, Vec3};
//!
//! let mut cube = factory::cube(2.0).unwrap();
//! let camera = Camera::new(Vec3::new(0.0, 0.0, -10.0));
//! cube.apply_light(&LightSource::new(Vec3::new(10.0, -10.0, -10.0), 2.0));
//!
//! let mut buf = CharBuffer::new(80, 40);
//! let mut written = Vec::new();
//! let drawn = Rasterizer::default().draw_mesh(&cube, &camera, Some(90.0), &mut buf, &mut written);
//!
//! assert_eq!(drawn, 1); // only the face looking at the camera survives culling
//! assert!(!written.is_empty());
//! ```

pub mod buffer;
pub mod camera;
pub mod error;
pub mod face;
pub mod factory;
pub mod light;
pub mod mesh;
pub mod ramp;
pub mod raster;
pub mod rotation;
pub mod vector;

pub use term3d_types as types;

// Re-export commonly used types for convenience
pub use buffer::{CharBuffer, Coord};
pub use camera::Camera;
pub use error::GeometryError;
pub use face::{Corners, Face};
pub use light::LightSource;
pub use mesh::Mesh;
pub use ramp::Ramp;
pub use raster::{is_point_in_triangle, project_to_cell, Rasterizer, ScreenPoint};
pub use rotation::{AxisRotation, Orientation};
pub use vector::{Vec2, Vec3};
