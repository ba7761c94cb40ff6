//! Board tests - occupancy, footprints and row+column clearing

use glow_grid::core::{get_shape, Board};
use glow_grid::types::{PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIM};

fn fill_row(board: &mut Board, row: i32) {
    for col in 0..board.width() as i32 {
        assert!(board.set(row, col, Some(PieceKind::Single)));
    }
}

fn fill_col(board: &mut Board, col: i32) {
    for row in 0..board.height() as i32 {
        assert!(board.set(row, col, Some(PieceKind::Single)));
    }
}

// ============== Basics ==============

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), DEFAULT_BOARD_WIDTH);
    assert_eq!(board.height(), DEFAULT_BOARD_HEIGHT);

    for row in 0..DEFAULT_BOARD_HEIGHT as i32 {
        for col in 0..DEFAULT_BOARD_WIDTH as i32 {
            assert_eq!(board.get(row, col), Some(None), "({}, {}) should be empty", row, col);
        }
    }
}

#[test]
fn test_board_dimensions_are_clamped() {
    let board = Board::new(0, 40);
    assert_eq!(board.width(), 1);
    assert_eq!(board.height(), MAX_BOARD_DIM as u8);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 10), None);
    assert!(board.is_out_of_bounds(0, 10));
    assert!(!board.is_out_of_bounds(9, 9));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();
    assert!(board.set(5, 7, Some(PieceKind::Cube3)));
    assert_eq!(board.get(5, 7), Some(Some(PieceKind::Cube3)));
    assert!(board.is_occupied(5, 7));

    assert!(board.set(5, 7, None));
    assert!(board.is_free(5, 7));
    assert!(!board.set(10, 0, Some(PieceKind::Single)));
}

// ============== Placement ==============

#[test]
fn test_occupy_is_all_or_nothing() {
    let mut board = Board::default();
    board.set(0, 2, Some(PieceKind::Single));
    let before = board.clone();

    let bar = get_shape(PieceKind::Bar3H);
    assert!(!board.occupy(&Board::footprint(&bar, 0, 0), PieceKind::Bar3H));
    assert_eq!(board, before);

    assert!(!board.occupy(&Board::footprint(&bar, 0, 8), PieceKind::Bar3H));
    assert_eq!(board, before);

    assert!(board.occupy(&Board::footprint(&bar, 1, 0), PieceKind::Bar3H));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_can_place_checks_bounds_and_overlap() {
    let mut board = Board::default();
    let square = get_shape(PieceKind::Square);

    assert!(board.can_place(&square, 8, 8));
    assert!(!board.can_place(&square, 9, 8));
    assert!(!board.can_place(&square, -1, 0));

    board.set(9, 9, Some(PieceKind::Single));
    assert!(!board.can_place(&square, 8, 8));
}

#[test]
fn test_holes_in_shape_do_not_collide() {
    let mut board = Board::default();
    board.set(0, 1, Some(PieceKind::Single));
    // L occupies the left column and bottom row of its 3x3 box.
    assert!(board.can_place(&get_shape(PieceKind::L), 0, 0));
}

#[test]
fn test_first_fit_is_row_major() {
    let mut board = Board::default();
    board.set(0, 0, Some(PieceKind::Single));
    assert_eq!(board.first_fit(&get_shape(PieceKind::Single)), Some((0, 1)));
    assert_eq!(board.first_fit(&get_shape(PieceKind::Bar5V)), Some((0, 1)));
}

// ============== Line Clearing ==============

#[test]
fn test_full_row_and_column_clear_together() {
    let mut board = Board::default();
    fill_row(&mut board, 2);
    fill_col(&mut board, 7);
    assert_eq!(board.occupied_count(), 19);

    let result = board.clear_full_lines();
    assert_eq!(result.rows.as_slice(), &[2]);
    assert_eq!(result.cols.as_slice(), &[7]);
    assert_eq!(result.lines(), 2);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_clear_does_not_shift_cells() {
    let mut board = Board::default();
    board.set(0, 3, Some(PieceKind::Square));
    fill_row(&mut board, 5);

    board.clear_full_lines();
    assert_eq!(board.get(0, 3), Some(Some(PieceKind::Square)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_rows_and_cols_by_index() {
    let mut board = Board::default();
    fill_row(&mut board, 2);
    fill_col(&mut board, 7);
    board.set(5, 1, Some(PieceKind::Square));
    assert_eq!(board.occupied_count(), 20);

    // Out-of-range indices are ignored.
    board.clear_rows(&[2, 40]);
    assert_eq!(board.occupied_count(), 10);
    for col in 0..10 {
        assert_eq!(board.get(2, col), Some(None));
    }
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::Single)));
    assert_eq!(board.get(5, 1), Some(Some(PieceKind::Square)));

    board.clear_cols(&[7, 33]);
    assert_eq!(board.occupied_count(), 1);
    assert_eq!(board.get(5, 1), Some(Some(PieceKind::Square)));
}

#[test]
fn test_clear_without_full_lines_is_noop() {
    let mut board = Board::default();
    board.set(4, 4, Some(PieceKind::Single));
    let before = board.clone();

    assert!(board.clear_full_lines().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_two_full_rows_and_two_full_columns() {
    let mut board = Board::default();
    fill_row(&mut board, 0);
    fill_row(&mut board, 9);
    fill_col(&mut board, 0);
    fill_col(&mut board, 9);

    let result = board.clear_full_lines();
    assert_eq!(result.lines(), 4);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_from_rows_rejects_ragged_input() {
    assert!(Board::from_rows(vec![vec![None; 3], vec![None; 2]]).is_none());
    assert!(Board::from_rows(Vec::new()).is_none());

    let board = Board::from_rows(vec![vec![None, Some(PieceKind::Single)]; 2]).unwrap();
    assert_eq!((board.width(), board.height()), (2, 2));
    assert_eq!(board.to_rows()[1][1], Some(PieceKind::Single));
}
