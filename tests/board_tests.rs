//! Board tests - collision, merging, and line clearing

use classic_tetris::core::{create_empty_board, Board, Piece, Shape};
use classic_tetris::core::get_shape;
use classic_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

fn single() -> Shape {
    Shape::from_rows(&[&[1]]).unwrap()
}

#[test]
fn test_board_new_empty() {
    let board = create_empty_board(BOARD_WIDTH, BOARD_HEIGHT);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert_eq!(board.cells().len(), 200);
    assert!(board.cells().iter().all(|&c| c == EMPTY));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(10, 20);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 20), None);
    assert_eq!(board.get(9, 19), Some(EMPTY));
}

#[test]
fn test_board_set_rejects_bad_writes() {
    let mut board = Board::new(10, 20);
    assert!(board.set(5, 10, PieceKind::T.tag()));
    assert_eq!(board.get(5, 10), Some(6));

    assert!(!board.set(-1, 0, 1));
    assert!(!board.set(0, 20, 1));
    assert!(!board.set(0, 0, 8));
    assert_eq!(board.get(0, 0), Some(EMPTY));
}

#[test]
fn test_from_rows_validates_shape() {
    assert!(Board::from_rows(vec![vec![0, 1], vec![0]]).is_none());
    assert!(Board::from_rows(vec![]).is_none());
    assert!(Board::from_rows(vec![vec![9]]).is_none());

    let board = Board::from_rows(vec![vec![0, 1, 2], vec![3, 0, 0]]).unwrap();
    assert_eq!((board.width(), board.height()), (3, 2));
    assert_eq!(board.get(2, 0), Some(2));
    assert_eq!(board.to_rows(), vec![vec![0, 1, 2], vec![3, 0, 0]]);
}

#[test]
fn test_collision_walls_and_floor() {
    let board = Board::new(10, 20);
    let o = get_shape(PieceKind::O);

    assert!(!board.collides(0, 0, &o));
    assert!(!board.collides(8, 18, &o));
    assert!(board.collides(-1, 0, &o));
    assert!(board.collides(9, 0, &o));
    assert!(board.collides(0, 19, &o));
}

#[test]
fn test_collision_ignores_empty_shape_cells() {
    let board = Board::new(10, 20);
    // The I shape's blocks sit on its second row; its top row is empty.
    let i = get_shape(PieceKind::I);
    assert!(!board.collides(0, -1, &i));
    assert!(!board.collides(0, 18, &i));
    assert!(board.collides(0, 19, &i));
}

#[test]
fn test_collision_with_stack() {
    let mut board = Board::new(10, 20);
    board.set(4, 19, 2);
    let o = get_shape(PieceKind::O);
    assert!(board.collides(3, 18, &o));
    assert!(board.collides(4, 18, &o));
    assert!(!board.collides(5, 18, &o));
}

#[test]
fn test_above_top_is_not_a_collision() {
    let mut board = Board::new(10, 20);
    board.set(0, 0, 1);
    // Block above the top edge in the occupied column.
    assert!(!board.collides(0, -1, &single()));
    assert!(board.collides(0, 0, &single()));
}

#[test]
fn test_merge_skips_cells_above_top() {
    let board = Board::new(10, 20);
    let o = Piece::new(3, -1, get_shape(PieceKind::O), 4);

    let merged = board.merged_with(&o);
    assert_eq!(merged.filled_count(), 2);
    assert_eq!(merged.get(3, 0), Some(4));
    assert_eq!(merged.get(4, 0), Some(4));
    // The input board is untouched.
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_lines_keeps_row_count() {
    let mut board = Board::new(10, 20);
    for x in 0..10 {
        board.set(x, 19, 1);
        board.set(x, 17, 2);
    }
    board.set(3, 18, 5);
    board.set(7, 16, 6);

    let result = board.clear_lines();
    assert_eq!(result.lines_cleared, 2);
    assert_eq!(result.board.height(), 20);
    assert_eq!(result.board.rows().count(), 20);

    // Survivors keep their order and slide down.
    assert_eq!(result.board.get(3, 19), Some(5));
    assert_eq!(result.board.get(7, 18), Some(6));
    assert_eq!(result.board.filled_count(), 2);
    assert!(result.board.rows().take(18).all(|row| row.iter().all(|&c| c == EMPTY)));
}

#[test]
fn test_clear_lines_without_full_rows() {
    let mut board = Board::new(10, 20);
    board.set(0, 19, 1);
    let result = board.clear_lines();
    assert_eq!(result.lines_cleared, 0);
    assert_eq!(result.board, board);
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new(10, 20);
    for y in 16..20 {
        for x in 0..10 {
            board.set(x, y, 1);
        }
    }
    let result = board.clear_lines();
    assert_eq!(result.lines_cleared, 4);
    assert_eq!(result.board.filled_count(), 0);
}

#[test]
fn test_zero_width_board_has_empty_rows() {
    let board = create_empty_board(0, 20);
    assert_eq!(board.rows().count(), 20);
    assert!(board.to_rows().iter().all(|row| row.is_empty()));
    assert!(!board.is_row_full(0));

    let cleared = board.clear_lines();
    assert_eq!(cleared.lines_cleared, 0);
    assert!(board.collides(0, 0, &single()));
}
