//! term3d (workspace facade crate).
//!
//! Re-exports the member crates under short names so binaries, integration
//! tests and benches can write `term3d::core::Mesh` or `term3d::engine::Scene`.

pub use term3d_core as core;
pub use term3d_engine as engine;
pub use term3d_input as input;
pub use term3d_term as term;
pub use term3d_types as types;
