//! Terminal front end.
//!
//! The geometry core renders into a [`CharBuffer`](crate::core::CharBuffer);
//! this crate owns the terminal session (raw mode, alternate screen, hidden
//! cursor) and writes buffers to it, either whole or only the changed cells.
//! No ratatui widgets or layout are involved.

pub mod hud;
pub mod renderer;

pub use term3d_core as core;
pub use term3d_types as types;

pub use hud::{draw_fps, fps_text};
pub use renderer::{encode_dirty_into, encode_full_into, TerminalRenderer};
