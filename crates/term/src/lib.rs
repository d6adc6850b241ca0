//! Terminal "game renderer" module.
//!
//! Draws a [`BoardSnapshot`](tui_blocks_core::BoardSnapshot) into a
//! framebuffer of styled glyphs and flushes it to the terminal. No ratatui
//! widgets or layout: the board is small and fixed, so a framebuffer plus a
//! run-length diff is all the pipeline needs.
//!
//! - [`fb`]: glyphs, styles and the framebuffer itself
//! - [`game_view`]: snapshot -> framebuffer (pure, unit-testable)
//! - [`renderer`]: framebuffer -> crossterm command stream

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{write_frame_diff, write_full_frame, TerminalRenderer, MAX_SPAN_GAP};
