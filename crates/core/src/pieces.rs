//! Pieces module - the piece catalog and spawn placement
//!
//! Each kind has a single spawn orientation; every other orientation comes
//! from [`Shape::rotate_about_center`], so there are no rotation tables.

use crate::geometry::{Point, Shape};
use crate::types::{PieceKind, SPAWN_SLACK};

/// Local cells of a catalog piece
pub type PieceCells = [Point; 4];

const fn cells(raw: [(i32, i32); 4]) -> PieceCells {
    [
        Point::new(raw[0].0, raw[0].1),
        Point::new(raw[1].0, raw[1].1),
        Point::new(raw[2].0, raw[2].1),
        Point::new(raw[3].0, raw[3].1),
    ]
}

const T_CELLS: PieceCells = cells([(0, 1), (1, 1), (2, 1), (1, 2)]);
const S_CELLS: PieceCells = cells([(0, 2), (1, 2), (1, 1), (2, 1)]);
const J_CELLS: PieceCells = cells([(0, 2), (0, 1), (1, 1), (2, 1)]);
const O_CELLS: PieceCells = cells([(0, 0), (1, 0), (0, 1), (1, 1)]);
const I_CELLS: PieceCells = cells([(0, 2), (1, 2), (2, 2), (3, 2)]);

/// Get the local cells for a piece kind in spawn orientation
pub fn get_cells(kind: PieceKind) -> PieceCells {
    match kind {
        PieceKind::T => T_CELLS,
        PieceKind::S => S_CELLS,
        PieceKind::J => J_CELLS,
        PieceKind::O => O_CELLS,
        PieceKind::I => I_CELLS,
    }
}

/// Spawn offset for a board: horizontally centered, two rows below the top
pub fn spawn_offset(width: i32, height: i32) -> Point {
    Point::new(width / 2, height - 2)
}

/// Build the shape of a freshly spawned piece
pub fn spawn_shape(kind: PieceKind, width: i32, height: i32) -> Shape {
    Shape::new(get_cells(kind), spawn_offset(width, height))
}

/// Edge used when searching for the smallest playable board
const PROBE_EDGE: i32 = 64;

/// True when every catalog piece fits at its spawn offset on an empty board
pub fn fits_at_spawn(width: i32, height: i32) -> bool {
    PieceKind::ALL.into_iter().all(|kind| {
        spawn_shape(kind, width, height).within_bounds(width, height, SPAWN_SLACK)
    })
}

/// Smallest `(width, height)` for which [`fits_at_spawn`] holds
///
/// The horizontal and vertical limits are independent: spawn is centered
/// on `x` and pinned to the top on `y`.
pub fn min_board_size() -> (i32, i32) {
    let width = (1..=PROBE_EDGE)
        .find(|&w| fits_at_spawn(w, PROBE_EDGE))
        .unwrap_or(PROBE_EDGE);
    let height = (1..=PROBE_EDGE)
        .find(|&h| fits_at_spawn(PROBE_EDGE, h))
        .unwrap_or(PROBE_EDGE);
    (width, height)
}
