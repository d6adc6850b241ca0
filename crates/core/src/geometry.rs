//! Geometry module - points and rigid shapes on the integer grid
//!
//! A [`Shape`] is a list of local cells plus an anchoring offset. The same
//! type represents the falling piece and the whole settled field; the field's
//! cells are already absolute and its offset stays at the origin.
//!
//! Every operation here is pure: transformations return new shapes.

use std::collections::HashSet;

/// A cell coordinate: `x` grows rightward, `y` grows upward
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Add)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A rigid collection of cells anchored at `offset`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shape {
    cells: Vec<Point>,
    offset: Point,
}

impl Shape {
    pub fn new(cells: impl IntoIterator<Item = Point>, offset: Point) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            offset,
        }
    }

    /// A shape with no cells at the origin (the initial settled field)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cells relative to the offset
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Same cells, offset shifted by `(dx, dy)`
    pub fn translate(&self, dx: i32, dy: i32) -> Shape {
        Shape {
            cells: self.cells.clone(),
            offset: self.offset + Point::new(dx, dy),
        }
    }

    /// Cells in board coordinates
    pub fn absolute_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().map(move |&p| p + self.offset)
    }

    /// True when every absolute cell lies in `[0, width) x [0, height + y_upper_slack)`
    pub fn within_bounds(&self, width: i32, height: i32, y_upper_slack: i32) -> bool {
        self.absolute_cells()
            .all(|p| p.x >= 0 && p.x < width && p.y >= 0 && p.y < height + y_upper_slack)
    }

    /// True when the two shapes share at least one absolute cell
    pub fn overlaps(&self, other: &Shape) -> bool {
        // Hash the larger side; the settled field is usually the big one.
        let (big, small) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        if small.is_empty() {
            return false;
        }
        let occupied: HashSet<Point> = big.absolute_cells().collect();
        small.absolute_cells().any(|p| occupied.contains(&p))
    }

    /// Absolute cells of both shapes in one origin-anchored shape
    ///
    /// Coincident cells are kept twice; collision tests treat cells as a set.
    pub fn merge(&self, other: &Shape) -> Shape {
        Shape {
            cells: self.absolute_cells().chain(other.absolute_cells()).collect(),
            offset: Point::ORIGIN,
        }
    }

    /// Quarter turn (-90 degrees) about the center of the local bounding square
    ///
    /// The center is `(L / 2, L / 2)` where `L` is the largest local coordinate
    /// on either axis. Turning `(x, y)` about that center lands exactly on
    /// `(y, L - x)`, so no rounding is needed. The offset is unchanged and no
    /// kick is attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_core::geometry::{Point, Shape};
    ///
    /// let bar = Shape::new([(0, 2), (1, 2), (2, 2), (3, 2)].map(Point::from), Point::ORIGIN);
    /// let turned = bar.rotate_about_center();
    /// assert!(turned.cells().iter().all(|p| p.x == 2));
    /// ```
    pub fn rotate_about_center(&self) -> Shape {
        let span = self
            .cells
            .iter()
            .map(|p| p.x.max(p.y))
            .max()
            .unwrap_or(0);
        Shape {
            cells: self
                .cells
                .iter()
                .map(|p| Point::new(p.y, span - p.x))
                .collect(),
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(cells: &[(i32, i32)], offset: (i32, i32)) -> Shape {
        Shape::new(cells.iter().copied().map(Point::from), offset.into())
    }

    fn sorted(mut cells: Vec<Point>) -> Vec<Point> {
        cells.sort();
        cells
    }

    #[test]
    fn translate_moves_offset_only() {
        let s = shape(&[(0, 0), (1, 0)], (3, 4));
        let t = s.translate(-1, 2);
        assert_eq!(t.offset(), Point::new(2, 6));
        assert_eq!(t.cells(), s.cells());
    }

    #[test]
    fn absolute_cells_add_offset() {
        let s = shape(&[(0, 0), (1, 2)], (5, 1));
        let abs: Vec<Point> = s.absolute_cells().collect();
        assert_eq!(abs, vec![Point::new(5, 1), Point::new(6, 3)]);
    }

    #[test]
    fn within_bounds_respects_edges_and_slack() {
        let s = shape(&[(0, 0), (1, 0)], (0, 0));
        assert!(s.within_bounds(2, 1, 0));
        assert!(!s.within_bounds(1, 1, 0));

        let high = shape(&[(0, 0)], (0, 5));
        assert!(!high.within_bounds(3, 5, 0));
        assert!(high.within_bounds(3, 5, 1));
        assert!(!high.translate(0, 1).within_bounds(3, 5, 1));

        let below = shape(&[(0, 0)], (0, -1));
        assert!(!below.within_bounds(3, 5, 2));
        let left = shape(&[(0, 0)], (-1, 0));
        assert!(!left.within_bounds(3, 5, 2));
    }

    #[test]
    fn empty_shape_is_always_in_bounds() {
        assert!(Shape::empty().within_bounds(1, 1, 0));
    }

    #[test]
    fn overlaps_compares_absolute_cells() {
        let a = shape(&[(0, 0), (1, 0)], (0, 0));
        let b = shape(&[(0, 0)], (1, 0));
        let c = shape(&[(0, 0)], (2, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&Shape::empty()));
        assert!(!Shape::empty().overlaps(&a));
    }

    #[test]
    fn merge_keeps_all_cells_at_origin() {
        let a = shape(&[(0, 0)], (1, 1));
        let b = shape(&[(0, 0), (0, 1)], (1, 1));
        let m = a.merge(&b);
        assert_eq!(m.offset(), Point::ORIGIN);
        assert_eq!(
            m.cells(),
            &[Point::new(1, 1), Point::new(1, 1), Point::new(1, 2)]
        );
    }

    #[test]
    fn rotate_keeps_square_in_place() {
        let o = shape(&[(0, 0), (1, 0), (0, 1), (1, 1)], (4, 7));
        let r = o.rotate_about_center();
        assert_eq!(r.offset(), o.offset());
        assert_eq!(sorted(r.cells().to_vec()), sorted(o.cells().to_vec()));
    }

    #[test]
    fn rotate_turns_clockwise_in_y_up_space() {
        // T pointing up becomes T pointing right.
        let t = shape(&[(0, 1), (1, 1), (2, 1), (1, 2)], (0, 0));
        let r = t.rotate_about_center();
        assert_eq!(
            r.cells(),
            &[
                Point::new(1, 2),
                Point::new(1, 1),
                Point::new(1, 0),
                Point::new(2, 1)
            ]
        );
    }

    #[test]
    fn four_rotations_restore_j() {
        let j = shape(&[(0, 2), (0, 1), (1, 1), (2, 1)], (2, 2));
        let mut r = j.clone();
        for _ in 0..4 {
            r = r.rotate_about_center();
        }
        assert_eq!(r, j);
    }

    #[test]
    fn rotate_empty_shape_is_noop() {
        assert_eq!(Shape::empty().rotate_about_center(), Shape::empty());
    }
}
