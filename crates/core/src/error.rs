//! Error types for mesh and ramp construction.

use thiserror::Error;

/// Contract violations rejected at construction time.
///
/// Degenerate geometry (colinear edges, zero-area triangles) is not an error;
/// the pipeline has defined fallbacks for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A face must have exactly 3 or 4 corners.
    #[error("face has {vertices} vertices, expected 3 or 4")]
    MalformedFace { vertices: usize },

    /// A face refers to a vertex the mesh does not own.
    #[error("vertex index {index} out of range for {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    /// A face index passed to a mesh operation does not exist.
    #[error("face index {index} out of range for {len} faces")]
    FaceOutOfRange { index: usize, len: usize },

    /// A mesh needs at least one face.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A brightness ramp needs a darkest and a brightest glyph.
    #[error("brightness ramp has {len} glyphs, expected at least 2")]
    RampTooShort { len: usize },
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
