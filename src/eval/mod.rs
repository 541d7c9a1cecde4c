//! Evaluation module for candidate moves
//!
//! Scores an empty cell by the line shapes it would extend for either side
//! plus a bias towards the centre of the board.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_bias, evaluate_line, line_shape, score_cell, LineShape};
pub use patterns::{LineScore, ScoreWeights};
