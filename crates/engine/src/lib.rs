//! Frame engine: everything between the geometry core and the terminal.
//!
//! - [`config`]: `RenderConfig` loaded from `TERM3D_*` environment variables
//! - [`scene`]: the per-run context (meshes, camera, light, toggles) and
//!   one-frame rendering into a `CharBuffer`
//! - [`clock`]: frame pacing and FPS measurement
//! - [`perf`]: optional JSON-lines performance log

pub mod clock;
pub mod config;
pub mod perf;
pub mod scene;

pub use clock::FrameClock;
pub use config::RenderConfig;
pub use perf::{FrameRecord, PerfLog};
pub use scene::{build_model, FrameStats, Scene};
