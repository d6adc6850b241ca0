//! tui-blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! that sit between the engine and the terminal: CLI configuration and the
//! gravity driver. The engine itself lives in `tui_blocks_core`.

pub mod config;
pub mod driver;

pub use tui_blocks_core as core;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;

pub use config::{Cli, GameConfig, Randomizer, SessionPicker};
pub use driver::{FrameClock, GravityDriver};
