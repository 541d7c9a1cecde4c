//! Heuristic scoring of empty cells
//!
//! This is a static, depth-1 evaluation: each empty cell is scored by the
//! lines it would extend for the engine (attack) and for the opponent
//! (defense), plus a positional bias towards the centre. Nothing here
//! mutates the board; the cell under evaluation is assumed to be empty and
//! is never counted as part of a run.

use crate::board::{Board, Player, Pos, Stone, BOARD_SIZE};
use crate::rules::{run_length, DIRECTIONS};

use super::patterns::{LineScore, ScoreWeights};

/// Centre of the board (7, 7 on a 15x15 board)
const CENTER: u8 = (BOARD_SIZE / 2) as u8;

/// Shape of the run a hypothetical stone at a cell would join along one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    /// Friendly stones touching the cell, both directions combined
    pub count: usize,
    /// Ends of the run that stop on an empty cell (0, 1 or 2)
    pub open_ends: usize,
}

/// Measure the run `player` would extend by playing `pos`, along `(dx, dy)`
pub fn line_shape(board: &Board, pos: Pos, dx: i32, dy: i32, player: Player) -> LineShape {
    let mut count = 0;
    let mut open_ends = 0;

    for (sx, sy) in [(dx, dy), (-dx, -dy)] {
        let run = run_length(board, pos, sx, sy, player);
        count += run;
        // The cell right after the run decides whether this end is open
        let end = pos.offset(sx, sy, run as i32 + 1);
        if end.is_some_and(|p| board.at(p) == Stone::Empty) {
            open_ends += 1;
        }
    }

    LineShape { count, open_ends }
}

/// Table score for a `player` stone at `pos` along one direction
#[inline]
pub fn evaluate_line(board: &Board, pos: Pos, dx: i32, dy: i32, player: Player) -> i32 {
    let shape = line_shape(board, pos, dx, dy, player);
    LineScore::lookup(shape.count, shape.open_ends)
}

/// Reward for central cells: `(BOARD_SIZE - manhattan distance to centre) * weight`
#[inline]
pub fn center_bias(pos: Pos, weight: i32) -> i32 {
    let distance = pos.manhattan(Pos::new(CENTER, CENTER));
    (BOARD_SIZE as i32 - distance) * weight
}

/// Total heuristic score of playing `pos` for `ai` against `human`
#[must_use]
pub fn score_cell(board: &Board, pos: Pos, ai: Player, human: Player, weights: &ScoreWeights) -> i32 {
    let mut score = center_bias(pos, weights.center);

    for &(dx, dy) in &DIRECTIONS {
        score += evaluate_line(board, pos, dx, dy, ai) * weights.attack;
        score += evaluate_line(board, pos, dx, dy, human) * weights.defense;
    }

    score
}
