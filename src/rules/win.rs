//! Legality, win and draw checks
//!
//! All checks are read-only. `check_win` treats the queried cell as if the
//! player already occupied it, so the AI can ask "would this win?" without
//! placing and removing a stone.

use crate::board::{Board, Player, Pos};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Stones needed in a row to win
const WIN_LENGTH: usize = 5;

/// A move at `(x, y)` is legal iff the cell is on the board and empty
pub fn is_legal(board: &Board, x: i32, y: i32) -> bool {
    Pos::try_new(x, y).is_some_and(|pos| board.is_empty(pos))
}

/// Contiguous `player` stones starting one step from `pos` along `(dx, dy)`.
///
/// `pos` itself is not counted. The walk stops at the board edge or at the
/// first cell not owned by `player` (empty, opponent or obstacle).
#[inline]
pub fn run_length(board: &Board, pos: Pos, dx: i32, dy: i32, player: Player) -> usize {
    let stone = player.stone();
    let mut count = 0;
    let mut step = 1;
    while let Some(next) = pos.offset(dx, dy, step) {
        if board.at(next) != stone {
            break;
        }
        count += 1;
        step += 1;
    }
    count
}

/// Does a `player` stone at `pos` complete five or more in a row?
///
/// The cell at `pos` counts as the player's regardless of its current
/// contents. Overlines (six or more) also win.
pub fn check_win(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS.iter().any(|&(dx, dy)| {
        let total = 1 + run_length(board, pos, dx, dy, player) + run_length(board, pos, -dx, -dy, player);
        total >= WIN_LENGTH
    })
}

/// The full winning run through `pos`, ordered row-major.
///
/// Returns `None` if a `player` stone at `pos` would not win.
pub fn winning_line(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    for &(dx, dy) in &DIRECTIONS {
        let back = run_length(board, pos, -dx, -dy, player) as i32;
        let forward = run_length(board, pos, dx, dy, player) as i32;
        if (back + forward + 1) as usize >= WIN_LENGTH {
            let mut line: Vec<Pos> = (-back..=forward)
                .filter_map(|step| pos.offset(dx, dy, step))
                .collect();
            line.sort();
            return Some(line);
        }
    }
    None
}

/// Is there five-in-a-row for `player` anywhere on the board?
pub fn has_five(board: &Board, player: Player) -> bool {
    let stone = player.stone();
    (0..crate::board::TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| board.at(pos) == stone)
        .any(|pos| {
            // Only start counting at the first stone of each run
            DIRECTIONS.iter().any(|&(dx, dy)| {
                let is_start = pos
                    .offset(-dx, -dy, 1)
                    .map_or(true, |prev| board.at(prev) != stone);
                is_start && 1 + run_length(board, pos, dx, dy, player) >= WIN_LENGTH
            })
        })
}

/// A full board with no five-in-a-row on it is a draw
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && !has_five(board, Player::Black) && !has_five(board, Player::White)
}
