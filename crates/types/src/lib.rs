//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the input adapter and the renderer alike.
//!
//! # Board Dimensions
//!
//! The default playfield is 12 columns by 20 rows. Coordinates are
//! `(x, y)` with `x` growing to the right and `y` growing upward: gravity
//! moves pieces toward `y = 0`.
//!
//! Pieces spawn at `(width / 2, height - 2)`, which places the upper part of
//! some pieces above the visible field. [`SPAWN_SLACK`] is the number of rows
//! above the field in which an active piece may live; it is applied to every
//! vertical bounds check, not only at spawn.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 1000 | Interval between gravity steps |
//! | `FRAME_MS` | 16 | Input poll / redraw interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Command, PieceKind, DEFAULT_BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 5);
//! assert_eq!(Command::ALL.len(), 4);
//! assert_eq!(DEFAULT_BOARD_WIDTH, 12);
//! ```

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: i32 = 12;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: i32 = 20;

/// Rows above the visible field that an active piece may occupy
pub const SPAWN_SLACK: i32 = 2;

/// Gravity interval in milliseconds (one row per second)
pub const GRAVITY_MS: u32 = 1000;

/// Input poll / redraw interval in milliseconds
pub const FRAME_MS: u32 = 16;

/// The five piece kinds in the catalog
///
/// - **T**: three in a row with a bump on top
/// - **S**: skew piece (covers the S/Z family)
/// - **J**: hook piece (covers the J/L family)
/// - **O**: 2x2 square
/// - **I**: four in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    S,
    J,
    O,
    I,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 5] = [
        PieceKind::T,
        PieceKind::S,
        PieceKind::J,
        PieceKind::O,
        PieceKind::I,
    ];

    /// Uppercase catalog letter
    pub const fn letter(self) -> char {
        match self {
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::J => 'J',
            PieceKind::O => 'O',
            PieceKind::I => 'I',
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::T => 0,
            PieceKind::S => 1,
            PieceKind::J => 2,
            PieceKind::O => 3,
            PieceKind::I => 4,
        }
    }
}

/// Commands an input adapter can issue to the board
///
/// Gravity uses the same downward step as [`Command::MoveDown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveDown,
        Command::Rotate,
    ];
}
