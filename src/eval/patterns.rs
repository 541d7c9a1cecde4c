//! Score table for line shapes and the weights that combine them

use serde::{Deserialize, Serialize};

/// Scores for a line shape around an empty cell.
///
/// `count` is the number of friendly stones touching the cell along one
/// line (both directions), `open` the number of ends of that run that
/// finish on an empty cell.
pub struct LineScore;

impl LineScore {
    /// Four or more: filling the cell makes five
    pub const FOUR: i32 = 10_000;
    /// _OOO_ around the cell
    pub const OPEN_THREE: i32 = 5_000;
    /// XOOO_ around the cell
    pub const CLOSED_THREE: i32 = 1_000;
    pub const OPEN_TWO: i32 = 500;
    pub const CLOSED_TWO: i32 = 100;
    pub const OPEN_ONE: i32 = 50;
    pub const CLOSED_ONE: i32 = 10;
    /// Anything else, including fully blocked shapes
    pub const BASE: i32 = 1;

    /// Look up the score for `count` stones with `open_ends` open ends
    pub fn lookup(count: usize, open_ends: usize) -> i32 {
        match (count, open_ends) {
            (4.., _) => Self::FOUR,
            (3, 2) => Self::OPEN_THREE,
            (3, 1) => Self::CLOSED_THREE,
            (2, 2) => Self::OPEN_TWO,
            (2, 1) => Self::CLOSED_TWO,
            (1, 2) => Self::OPEN_ONE,
            (1, 1) => Self::CLOSED_ONE,
            _ => Self::BASE,
        }
    }
}

/// Multipliers applied when summing a cell's score.
///
/// Attack outweighs defense so that, between equal shapes, the engine
/// prefers extending its own line over blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of the engine's own line shapes
    pub attack: i32,
    /// Weight of the opponent's line shapes
    pub defense: i32,
    /// Weight per step of closeness to the centre
    pub center: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            attack: 10,
            defense: 8,
            center: 2,
        }
    }
}
