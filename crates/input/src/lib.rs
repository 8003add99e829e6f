//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::ViewAction`] and decides
//! when a key should end the program. There is no key-repeat handling here:
//! each press (or terminal auto-repeat) is one action.

pub mod map;

pub use term3d_types as types;

pub use map::{handle_key_event, should_quit};
