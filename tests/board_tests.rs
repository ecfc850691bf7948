//! Board tests - merge, collision, and line clearing through the public API

use blockfall::core::{collides, Board, Catalog, Position, Shape};
use blockfall::types::{cell, BOARD_HEIGHT, BOARD_WIDTH};

fn o_piece() -> Shape {
    Catalog::standard().get(1).unwrap().clone()
}

#[test]
fn test_default_board_is_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH as usize);
    assert_eq!(board.height(), BOARD_HEIGHT as usize);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let board = Board::new(10, 20).unwrap();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 20), None);
}

#[test]
fn test_bottom_two_rows_clear_on_ten_by_four() {
    let mut board = Board::from_rows(&[&[0; 10], &[0; 10], &[1; 10], &[2; 10]]).unwrap();
    assert_eq!(board.clear_completed_lines(), 2);
    assert_eq!(board, Board::new(10, 4).unwrap());
}

#[test]
fn test_two_line_clear_keeps_partial_row() {
    let mut board = Board::from_rows(&[
        &[0; 10],
        &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        &[2; 10],
        &[3; 10],
    ])
    .unwrap();

    assert_eq!(board.clear_completed_lines(), 2);
    let expected = Board::from_rows(&[
        &[0; 10],
        &[0; 10],
        &[0; 10],
        &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    ])
    .unwrap();
    assert_eq!(board, expected);
}

#[test]
fn test_non_adjacent_clears_keep_order() {
    let mut board = Board::from_rows(&[
        &[0, 4, 0],
        &[5, 5, 5],
        &[6, 0, 6],
        &[7, 7, 7],
    ])
    .unwrap();

    assert_eq!(board.clear_completed_lines(), 2);
    assert_eq!(
        board,
        Board::from_rows(&[&[0, 0, 0], &[0, 0, 0], &[0, 4, 0], &[6, 0, 6]]).unwrap()
    );
}

#[test]
fn test_no_complete_rows_is_noop() {
    let mut board = Board::from_rows(&[&[1, 0], &[0, 1]]).unwrap();
    let before = board.clone();
    assert_eq!(board.clear_completed_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_merge_adds_exactly_the_piece_cells() {
    let mut board = Board::from_rows(&[&[0, 0, 0, 0], &[0, 0, 0, 0], &[9, 0, 0, 9]]).unwrap();
    let shape = o_piece();
    let at = Position::new(1, 1);
    assert!(!collides(&board, &shape, at));

    let before = board.occupied_count();
    board.merge(&shape, at);
    assert_eq!(board.occupied_count(), before + shape.filled_count());
    assert_eq!(board.get(1, 1), Some(cell(2)));
    assert_eq!(board.get(2, 2), Some(cell(2)));
    assert_eq!(board.get(0, 2), Some(cell(9)));
}

#[test]
fn test_collision_at_walls_floor_and_stack() {
    let board = Board::from_rows(&[&[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 8]]).unwrap();
    let shape = o_piece();

    assert!(!collides(&board, &shape, Position::new(0, 0)));
    assert!(collides(&board, &shape, Position::new(-1, 0)));
    assert!(collides(&board, &shape, Position::new(3, 0)));
    assert!(collides(&board, &shape, Position::new(0, 2)));
    assert!(collides(&board, &shape, Position::new(2, 1)));
    assert!(!collides(&board, &shape, Position::new(1, 1)));
}

#[test]
fn test_rows_above_board_never_collide() {
    let board = Board::from_rows(&[&[1, 1, 1], &[1, 1, 1]]).unwrap();
    let shape = o_piece();
    assert!(!collides(&board, &shape, Position::new(0, -2)));
    assert!(collides(&board, &shape, Position::new(0, -1)));
}

#[test]
fn test_clear_keeps_dimensions() {
    let mut board = Board::from_rows(&[&[1, 2, 3], &[4, 0, 6]]).unwrap();
    board.clear();
    assert_eq!((board.width(), board.height()), (3, 2));
    assert_eq!(board.occupied_count(), 0);
}
