use super::*;
use crate::error::GameError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_stone_codes() {
    for stone in [Stone::Empty, Stone::Black, Stone::White, Stone::Blocked] {
        assert_eq!(Stone::from_code(stone.code()), Some(stone));
    }
    assert_eq!(Stone::from_code(4), None);
    assert_eq!(Player::from_code(1), Some(Player::Black));
    assert_eq!(Player::from_code(2), Some(Player::White));
    assert_eq!(Player::from_code(0), None);
    assert_eq!(Player::from_code(3), None);
    assert_eq!(Stone::Blocked.player(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.x, 7);
    assert_eq!(pos2.y, 7);

    let pos3 = Pos::from_index(16);
    assert_eq!((pos3.x, pos3.y), (1, 1));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
    assert_eq!(Pos::try_new(15, 3), None);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
}

#[test]
fn test_pos_offset_and_distance() {
    let pos = Pos::new(0, 7);
    assert_eq!(pos.offset(1, 0, 3), Some(Pos::new(3, 7)));
    assert_eq!(pos.offset(-1, 0, 1), None);
    assert_eq!(Pos::new(0, 0).manhattan(Pos::new(7, 7)), 14);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_get_set_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(0, 0), Ok(Stone::Empty));
    assert_eq!(board.get(15, 0), Err(GameError::OutOfBounds { x: 15, y: 0 }));
    assert_eq!(board.get(0, -1), Err(GameError::OutOfBounds { x: 0, y: -1 }));

    board.set(3, 4, Stone::White).unwrap();
    assert_eq!(board.get(3, 4), Ok(Stone::White));
    assert_eq!(board.at(Pos::new(3, 4)), Stone::White);
    assert_eq!(board.get(4, 3), Ok(Stone::Empty));
    assert!(board.set(3, 15, Stone::Black).is_err());
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    assert!(!board.is_full());
    for idx in 0..TOTAL_CELLS {
        board.put(Pos::from_index(idx), Stone::Blocked);
    }
    assert!(board.is_full());
    board.put(Pos::new(14, 14), Stone::Empty);
    assert!(!board.is_full());
}

#[test]
fn test_clone_is_independent() {
    let mut board = Board::new();
    board.put(Pos::new(7, 7), Stone::Black);
    let copy = board.clone();
    board.put(Pos::new(7, 8), Stone::White);
    assert_eq!(copy.at(Pos::new(7, 7)), Stone::Black);
    assert_eq!(copy.at(Pos::new(7, 8)), Stone::Empty);
}

#[test]
fn test_counts_and_empty_cells() {
    let mut board = Board::new();
    assert!(board.is_board_empty());
    board.put(Pos::new(1, 0), Stone::Black);
    board.put(Pos::new(0, 1), Stone::White);
    board.put(Pos::new(2, 2), Stone::Blocked);

    assert_eq!(board.count(Stone::Black), 1);
    assert_eq!(board.count(Stone::White), 1);
    assert_eq!(board.stone_count(), 3);

    let mut empties = board.empty_cells();
    assert_eq!(empties.next(), Some(Pos::new(0, 0)));
    assert_eq!(empties.next(), Some(Pos::new(2, 0)));
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS - 3);
}

#[test]
fn test_rows_round_trip() {
    let mut board = Board::new();
    board.put(Pos::new(4, 2), Stone::Black);
    board.put(Pos::new(2, 4), Stone::White);
    board.put(Pos::new(14, 0), Stone::Blocked);

    let rows = board.to_rows();
    assert_eq!(rows.len(), BOARD_SIZE);
    assert_eq!(rows[2][4], 1);
    assert_eq!(rows[4][2], 2);
    assert_eq!(rows[0][14], 3);

    let restored = Board::from_rows(&rows).unwrap();
    assert_eq!(restored, board);
}

#[test]
fn test_from_rows_rejects_bad_shapes() {
    let mut rows = Board::new().to_rows();
    rows[3].pop();
    assert!(Board::from_rows(&rows).is_err());

    let mut rows = Board::new().to_rows();
    rows[0][0] = 9;
    assert!(Board::from_rows(&rows).is_err());

    let rows = vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE - 1];
    assert!(Board::from_rows(&rows).is_err());
}

#[test]
fn test_display_marks_cells() {
    let mut board = Board::new();
    board.put(Pos::new(0, 0), Stone::Black);
    board.put(Pos::new(1, 0), Stone::White);
    board.put(Pos::new(2, 0), Stone::Blocked);
    let text = board.to_string();
    let first_row = text.lines().nth(1).unwrap();
    assert!(first_row.starts_with(" 0  X O # ."));
}
