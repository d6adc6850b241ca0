//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole game-state engine. It knows nothing about
//! rendering, input or timing: a driver calls board commands and reads the
//! board back to draw it.
//!
//! # Module Structure
//!
//! - [`geometry`]: points and rigid shapes (translate, bounds, overlap, merge, rotate)
//! - [`pieces`]: the five-piece catalog and spawn placement
//! - [`rng`]: piece pickers (uniform, bag, scripted)
//! - [`board`]: the board engine: spawn, move, rotate, landing and line clearing
//! - [`snapshot`]: read model for renderers
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{Board, ScriptedPicker};
//! use tui_blocks_core::types::PieceKind;
//!
//! let mut board = Board::with_picker(4, 6, ScriptedPicker::repeat(PieceKind::O)).unwrap();
//! board.spawn();
//! while board.active().is_some() {
//!     board.tick();
//! }
//! assert_eq!(board.settled_cells().len(), 4);
//! ```

pub mod board;
pub mod geometry;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{erase_lines, Board};
pub use geometry::{Point, Shape};
pub use pieces::{fits_at_spawn, get_cells, min_board_size, spawn_shape};
pub use rng::{BagPicker, Lcg32, PiecePicker, RandomPicker, ScriptedPicker};
pub use snapshot::BoardSnapshot;

/// Rejected board construction
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("board width must be positive, got {width}")]
    InvalidWidth { width: i32 },
    #[display("board height must be positive, got {height}")]
    InvalidHeight { height: i32 },
}
