//! Pieces tests - catalog and rotation

use classic_tetris::core::pieces::catalog;
use classic_tetris::core::{get_shape, rotate, Piece, PieceGenerator, Shape};
use classic_tetris::types::{PieceKind, EMPTY};

#[test]
fn test_catalog_order_and_tags() {
    let shapes = catalog();
    assert_eq!(shapes.len(), 7);
    for (shape, kind) in shapes.iter().zip(PieceKind::ALL) {
        assert_eq!(shape.color_tag(), Some(kind.tag()));
    }
}

#[test]
fn test_shape_sizes() {
    assert_eq!(get_shape(PieceKind::I).width(), 4);
    assert_eq!(get_shape(PieceKind::O).width(), 2);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        let shape = get_shape(kind);
        assert_eq!((shape.width(), shape.height()), (3, 3), "{:?}", kind);
    }
}

#[test]
fn test_rotate_j_clockwise() {
    let rotated = rotate(&get_shape(PieceKind::J));
    let expected = Shape::from_rows(&[&[0, 2, 2], &[0, 2, 0], &[0, 2, 0]]).unwrap();
    assert_eq!(rotated, expected);
}

#[test]
fn test_rotate_four_times_is_identity() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        let back = rotate(&rotate(&rotate(&rotate(&shape))));
        assert_eq!(back, shape, "{:?}", kind);
    }

    let odd = Shape::from_rows(&[&[1, 0], &[1, 1], &[0, 1]]).unwrap();
    assert_eq!(odd.rotated().rotated().rotated().rotated(), odd);
}

#[test]
fn test_rotate_swaps_dimensions() {
    let bar = Shape::from_rows(&[&[3, 3, 3]]).unwrap();
    let rotated = rotate(&bar);
    assert_eq!((rotated.width(), rotated.height()), (1, 3));
    assert_eq!(rotated.get(0, 2), Some(3));
}

#[test]
fn test_rotate_empty_shape_is_empty() {
    let empty = Shape::from_rows(&[&[0, 0], &[0, 0]]).unwrap();
    let rotated = rotate(&empty);
    assert_eq!(rotated.blocks().count(), 0);
    assert_eq!(rotated.get(1, 1), Some(EMPTY));
}

#[test]
fn test_spawn_positions() {
    let mut generator = PieceGenerator::new(7, 10);
    for _ in 0..50 {
        let piece = generator.draw();
        let expected_x = 5 - (piece.shape.width() as i32) / 2;
        assert_eq!(piece.x, expected_x);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.shape.color_tag(), Some(piece.color));
    }
}

#[test]
fn test_generator_is_reproducible() {
    let mut a = PieceGenerator::new(2024, 10);
    let mut b = PieceGenerator::new(2024, 10);
    let left: Vec<Piece> = (0..20).map(|_| a.draw()).collect();
    let right: Vec<Piece> = (0..20).map(|_| b.draw()).collect();
    assert_eq!(left, right);
}

#[test]
fn test_generator_falls_back_on_empty_catalog() {
    let mut generator = PieceGenerator::with_catalog(Vec::new(), 1, 10);
    let piece = generator.draw();
    assert_eq!((piece.x, piece.y, piece.color), (0, 0, 1));
    assert_eq!(piece.shape.blocks().count(), 1);
}

#[test]
fn test_generator_falls_back_on_blockless_shape() {
    let blank = Shape::from_rows(&[&[0]]).unwrap();
    let mut generator = PieceGenerator::with_catalog(vec![blank], 1, 10);
    let piece = generator.draw();
    assert_eq!(piece.shape, Shape::from_rows(&[&[1]]).unwrap());
}
