//! Property tests for board invariants.
//!
//! Boards are at least 7 wide and 2 tall so every catalog piece fits at
//! spawn; the movement properties use 8 columns to leave room to shift.

use std::collections::HashSet;

use proptest::prelude::*;
use tui_blocks::core::{erase_lines, min_board_size, Board, Point, ScriptedPicker, Shape};
use tui_blocks::types::{Command, PieceKind, SPAWN_SLACK};

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop::sample::select(vec![
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveDown,
        Command::Rotate,
    ])
}

fn board(kind: PieceKind, width: i32, height: i32) -> Board<ScriptedPicker> {
    Board::with_picker(width, height, ScriptedPicker::repeat(kind)).unwrap()
}

fn assert_active_legal(b: &Board<ScriptedPicker>) {
    if let Some(cells) = b.active_cells() {
        let settled: HashSet<Point> = b.settled_cells().into_iter().collect();
        for p in cells {
            assert!(p.x >= 0 && p.x < b.width(), "x out of range: {p:?}");
            assert!(p.y >= 0 && p.y < b.height() + SPAWN_SLACK, "y out of range: {p:?}");
            assert!(!settled.contains(&p), "active overlaps settled at {p:?}");
        }
    }
}

proptest! {
    #[test]
    fn spawn_on_open_board_is_legal(
        kind in kind_strategy(),
        width in 7i32..24,
        height in 2i32..30,
    ) {
        let (min_width, min_height) = min_board_size();
        prop_assume!(width >= min_width && height >= min_height);
        let mut b = board(kind, width, height);
        b.spawn();
        prop_assert!(b.active().is_some());
        prop_assert!(!b.is_topped_out());
        assert_active_legal(&b);
    }

    #[test]
    fn left_then_right_is_identity_away_from_walls(
        kind in kind_strategy(),
        width in 8i32..24,
        shift in -3i32..3,
    ) {
        let mut b = board(kind, width, 20);
        b.spawn();
        for _ in 0..shift.abs() {
            if shift < 0 { b.move_left() } else { b.move_right() }
        }
        let before = b.active_cells().unwrap();
        let min_x = before.iter().map(|p| p.x).min().unwrap();
        prop_assume!(min_x > 0);

        b.move_left();
        b.move_right();
        prop_assert_eq!(b.active_cells().unwrap(), before);
    }

    #[test]
    fn unobstructed_move_down_lowers_active_only(
        kind in kind_strategy(),
        width in 8i32..24,
        steps in 0usize..10,
    ) {
        let mut b = board(kind, width, 20);
        b.spawn();
        for _ in 0..steps {
            b.move_down();
        }
        let before = b.active_cells().unwrap();
        let settled_before = b.settled_cells();

        b.move_down();
        let after = b.active_cells().unwrap();
        let expected: Vec<Point> = before.iter().map(|p| Point::new(p.x, p.y - 1)).collect();
        prop_assert_eq!(after, expected);
        prop_assert_eq!(b.settled_cells(), settled_before);
    }

    #[test]
    fn landing_moves_active_cells_into_settled(
        kind in kind_strategy(),
        width in 8i32..24,
        height in 4i32..20,
    ) {
        let mut b = board(kind, width, height);
        b.spawn();
        let mut last = b.active_cells().unwrap();
        while b.active().is_some() {
            last = b.active_cells().unwrap();
            b.move_down();
        }
        // A single piece on an empty board of width >= 8 never fills a row.
        let settled: HashSet<Point> = b.settled_cells().into_iter().collect();
        for p in last {
            prop_assert!(settled.contains(&p));
        }
    }

    #[test]
    fn random_play_keeps_board_consistent(
        seed_kinds in prop::collection::vec(kind_strategy(), 1..6),
        commands in prop::collection::vec(command_strategy(), 0..300),
        width in 8i32..14,
        height in 6i32..16,
    ) {
        let mut b = Board::with_picker(width, height, ScriptedPicker::new(seed_kinds)).unwrap();
        for command in commands {
            b.spawn();
            b.apply(command);
            assert_active_legal(&b);
            prop_assert_eq!(b.active().is_some(), b.active_kind().is_some());
            prop_assert!(b.settled().offset() == Point::ORIGIN);

            // No full row survives a landing.
            for y in 0..height {
                let row: HashSet<i32> = b
                    .settled_cells()
                    .into_iter()
                    .filter(|p| p.y == y)
                    .map(|p| p.x)
                    .collect();
                prop_assert!(row.len() < width as usize, "row {} left full", y);
            }
            if b.is_topped_out() {
                prop_assert!(b.active().is_none());
                break;
            }
        }
    }

    #[test]
    fn erase_lines_is_idempotent(
        raw in prop::collection::vec((0i32..6, 0i32..8), 0..48),
    ) {
        let field = Shape::new(raw.into_iter().map(Point::from), Point::ORIGIN);
        let once = erase_lines(&field, 6, 8);
        let twice = erase_lines(&once, 6, 8);
        prop_assert_eq!(once, twice);
    }
}
