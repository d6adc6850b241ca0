//! Board module - the settled field, the falling piece and the rules between them
//!
//! The board owns two shapes: the settled field (every landed cell, already in
//! absolute coordinates) and the optional active piece. Commands never fail:
//! a command that does not apply to the current state does nothing, and a
//! move or rotation that would collide is discarded.
//!
//! Collision means leaving `[0, width) x [0, height + SPAWN_SLACK)` or
//! touching a settled cell. The same slack is used at spawn and for every
//! later check, so a freshly spawned piece is never out of bounds.

use std::collections::HashSet;

use crate::geometry::{Point, Shape};
use crate::pieces::spawn_shape;
use crate::rng::{PiecePicker, RandomPicker};
use crate::snapshot::BoardSnapshot;
use crate::types::{Command, PieceKind, SPAWN_SLACK};
use crate::BoardError;

/// Game board: dimensions, settled field and the active piece
#[derive(Debug, Clone)]
pub struct Board<P = RandomPicker> {
    width: i32,
    height: i32,
    settled: Shape,
    active: Option<Shape>,
    active_kind: Option<PieceKind>,
    topped_out: bool,
    picker: P,
}

impl Board<RandomPicker> {
    /// Create an empty board that picks pieces uniformly at random
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        Self::with_picker(width, height, RandomPicker::default())
    }
}

impl<P> Board<P> {
    /// Create an empty board with a custom piece picker
    ///
    /// Any positive size is accepted. Below
    /// [`min_board_size`](crate::pieces::min_board_size) some catalog pieces
    /// do not fit at spawn, so [`Board::spawn`] can top out an empty board;
    /// check [`fits_at_spawn`](crate::pieces::fits_at_spawn) before
    /// building a board for play.
    pub fn with_picker(width: i32, height: i32, picker: P) -> Result<Self, BoardError> {
        if width <= 0 {
            return Err(BoardError::InvalidWidth { width });
        }
        if height <= 0 {
            return Err(BoardError::InvalidHeight { height });
        }
        Ok(Self {
            width,
            height,
            settled: Shape::empty(),
            active: None,
            active_kind: None,
            topped_out: false,
            picker,
        })
    }

    /// Preload settled cells (puzzle setups, tests)
    ///
    /// Full rows in the preloaded field are kept until the next landing
    /// runs line clearing. Cells are not range-checked: a cell outside
    /// `[0, width) x [0, height + SPAWN_SLACK)` is kept as is. It never
    /// collides, never counts toward a full row and is not drawn, but it
    /// is removed or shifted with its row like any other settled cell.
    pub fn with_settled(mut self, cells: impl IntoIterator<Item = Point>) -> Self {
        self.settled = Shape::new(cells, Point::ORIGIN);
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn settled(&self) -> &Shape {
        &self.settled
    }

    pub fn active(&self) -> Option<&Shape> {
        self.active.as_ref()
    }

    pub fn active_kind(&self) -> Option<PieceKind> {
        self.active_kind
    }

    /// True once a spawn was blocked; cleared by [`Board::reset`]
    pub fn is_topped_out(&self) -> bool {
        self.topped_out
    }

    /// Settled cells in board coordinates
    pub fn settled_cells(&self) -> Vec<Point> {
        self.settled.absolute_cells().collect()
    }

    /// Active piece cells in board coordinates, if a piece is falling
    pub fn active_cells(&self) -> Option<Vec<Point>> {
        self.active.as_ref().map(|a| a.absolute_cells().collect())
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    /// Copy the renderable state into `out`, reusing its allocations
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.width = self.width;
        out.height = self.height;
        out.settled.clear();
        out.settled.extend(self.settled.absolute_cells());
        match &self.active {
            Some(active) => {
                let cells = out.active.get_or_insert_with(Vec::new);
                cells.clear();
                cells.extend(active.absolute_cells());
            }
            None => out.active = None,
        }
        out.active_kind = self.active_kind;
        out.topped_out = self.topped_out;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Clear the field and the active piece, keeping dimensions and picker
    pub fn reset(&mut self) {
        self.settled = Shape::empty();
        self.active = None;
        self.active_kind = None;
        self.topped_out = false;
    }

    /// Move the active piece one column left
    pub fn move_left(&mut self) {
        self.try_translate(-1, 0);
    }

    /// Move the active piece one column right
    pub fn move_right(&mut self) {
        self.try_translate(1, 0);
    }

    /// Rotate the active piece a quarter turn; blocked rotations are discarded
    pub fn rotate(&mut self) {
        let Some(active) = &self.active else {
            return;
        };
        let candidate = active.rotate_about_center();
        if !self.has_collision(&candidate) {
            self.active = Some(candidate);
        }
    }

    /// Move the active piece one row down, landing it when blocked
    ///
    /// Landing merges the piece into the settled field, clears the active
    /// piece and erases every full row.
    pub fn move_down(&mut self) {
        let Some(active) = &self.active else {
            return;
        };
        let candidate = active.translate(0, -1);
        if self.has_collision(&candidate) {
            self.land();
        } else {
            self.active = Some(candidate);
        }
    }

    /// Gravity step; identical to [`Board::move_down`]
    pub fn tick(&mut self) {
        self.move_down();
    }

    /// Apply an input command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveDown => self.move_down(),
            Command::Rotate => self.rotate(),
        }
    }

    fn try_translate(&mut self, dx: i32, dy: i32) {
        let Some(active) = &self.active else {
            return;
        };
        let candidate = active.translate(dx, dy);
        if !self.has_collision(&candidate) {
            self.active = Some(candidate);
        }
    }

    fn has_collision(&self, candidate: &Shape) -> bool {
        !candidate.within_bounds(self.width, self.height, SPAWN_SLACK)
            || candidate.overlaps(&self.settled)
    }

    fn land(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.active_kind = None;
        let merged = self.settled.merge(&active);
        self.settled = erase_lines(&merged, self.width, self.height);
    }
}

impl<P: PiecePicker> Board<P> {
    /// Spawn a new piece if none is falling
    ///
    /// A blocked spawn tops the board out: no piece is placed and later
    /// spawns do nothing until [`Board::reset`].
    pub fn spawn(&mut self) {
        if self.active.is_some() || self.topped_out {
            return;
        }
        let kind = self.picker.pick();
        let candidate = spawn_shape(kind, self.width, self.height);
        if self.has_collision(&candidate) {
            self.topped_out = true;
            return;
        }
        self.active = Some(candidate);
        self.active_kind = Some(kind);
    }
}

/// Remove every full row from a field, compacting the rows above it
///
/// Rows `0..height` are scanned bottom-up. A row is full when all `width`
/// columns hold at least one cell. After each removal the scan restarts from
/// row 0. The result is anchored at the origin.
pub fn erase_lines(field: &Shape, width: i32, height: i32) -> Shape {
    let mut cells: Vec<Point> = field.absolute_cells().collect();
    while let Some(row) = first_full_row(&cells, width, height) {
        cells.retain(|p| p.y != row);
        for p in cells.iter_mut().filter(|p| p.y > row) {
            p.y -= 1;
        }
    }
    Shape::new(cells, Point::ORIGIN)
}

fn first_full_row(cells: &[Point], width: i32, height: i32) -> Option<i32> {
    (0..height).find(|&y| {
        let columns: HashSet<i32> = cells
            .iter()
            .filter(|p| p.y == y && p.x >= 0 && p.x < width)
            .map(|p| p.x)
            .collect();
        columns.len() == width as usize
    })
}
