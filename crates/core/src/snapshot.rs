use crate::geometry::Point;
use crate::types::PieceKind;

/// Read-only copy of everything a renderer needs from a board
///
/// Cells are absolute board coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    pub settled: Vec<Point>,
    pub active: Option<Vec<Point>>,
    pub active_kind: Option<PieceKind>,
    pub topped_out: bool,
}
