//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::Command`] plus the two
//! session requests (quit, restart), and collects a frame's worth of them in
//! a [`CommandBatch`].

pub mod batch;
pub mod map;

pub use tui_blocks_types as types;

pub use batch::{CommandBatch, MAX_COMMANDS_PER_FRAME};
pub use map::{classify, KeyAction};
