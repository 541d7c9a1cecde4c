//! Move selection for the computer player
//!
//! The engine answers in three phases, in strict priority order:
//!
//! 1. **Immediate win**: the first empty cell (row-major) where the engine
//!    completes five.
//! 2. **Block**: the first empty cell where the opponent would complete five.
//! 3. **Heuristic**: the empty cell with the strictly highest
//!    [`score_cell`] value; the first cell to reach the maximum keeps it.
//!
//! There is no lookahead beyond the win and block checks, and the board is
//! never mutated while searching.
//!
//! # Example
//!
//! ```
//! use gomoku::{select_move, Board, Player, Pos, Stone};
//!
//! let mut board = Board::new();
//! for x in 3..7 {
//!     board.put(Pos::new(x, 7), Stone::Black);
//! }
//!
//! // White must block the open four; (2, 7) comes first in scan order
//! assert_eq!(select_move(&board, Player::White, Player::Black), Some(Pos::new(2, 7)));
//! ```

use crate::board::{Board, Player, Pos};
use crate::eval::{score_cell, ScoreWeights};
use crate::rules::check_win;
use std::time::Instant;
use tracing::{debug, instrument, trace};

/// Which phase of the search produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Engine completes five
    ImmediateWin,
    /// Opponent would complete five here
    Block,
    /// Highest heuristic score
    Heuristic,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Chosen cell, `None` only when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Heuristic score of the chosen cell (0 for win/block answers)
    pub score: i32,
    /// Phase that produced the move
    pub search_type: SearchType,
    /// Empty cells examined across all phases
    pub cells_examined: u32,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl Decision {
    #[inline]
    fn forced(pos: Pos, search_type: SearchType, cells_examined: u32, start: Instant) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type,
            cells_examined,
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Heuristic Gomoku engine.
///
/// Stateless apart from its [`ScoreWeights`]; one engine can serve any
/// number of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AIEngine {
    weights: ScoreWeights,
}

impl AIEngine {
    /// Engine with the default weights (attack 10, defense 8, centre 2)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Best move for `ai`, taking its opponent as the other side
    #[must_use]
    pub fn get_move(&self, board: &Board, ai: Player) -> Option<Pos> {
        self.search(board, ai, ai.opponent()).best_move
    }

    /// Run all three phases and report which one answered
    #[instrument(skip(self, board), fields(stones = board.stone_count()))]
    pub fn search(&self, board: &Board, ai: Player, human: Player) -> Decision {
        let start = Instant::now();
        let mut examined = 0u32;

        // 1. Winning move for the engine
        for pos in board.empty_cells() {
            examined += 1;
            if check_win(board, pos, ai) {
                debug!(%pos, "Immediate win");
                return Decision::forced(pos, SearchType::ImmediateWin, examined, start);
            }
        }

        // 2. Opponent's winning move must be blocked
        for pos in board.empty_cells() {
            examined += 1;
            if check_win(board, pos, human) {
                debug!(%pos, "Blocking opponent five");
                return Decision::forced(pos, SearchType::Block, examined, start);
            }
        }

        // 3. Static evaluation, strict `>` keeps the first maximum
        let mut best: Option<(Pos, i32)> = None;
        for pos in board.empty_cells() {
            examined += 1;
            let score = score_cell(board, pos, ai, human, &self.weights);
            trace!(%pos, score, "Scored cell");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let decision = Decision {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, score)| score),
            search_type: SearchType::Heuristic,
            cells_examined: examined,
            time_ms: start.elapsed().as_millis() as u64,
        };
        debug!(best_move = ?decision.best_move, score = decision.score, "Heuristic move");
        decision
    }
}

/// Choose a move for `ai` against `human` with the default weights.
///
/// Returns `None` only when the board is full.
#[must_use]
pub fn select_move(board: &Board, ai: Player, human: Player) -> Option<Pos> {
    AIEngine::new().search(board, ai, human).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Stone, TOTAL_CELLS};

    #[test]
    fn test_empty_board_takes_center() {
        let board = Board::new();
        let decision = AIEngine::new().search(&board, Player::Black, Player::White);
        assert_eq!(decision.best_move, Some(Pos::new(7, 7)));
        assert_eq!(decision.search_type, SearchType::Heuristic);
        assert_eq!(decision.score, 102);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        for x in 0..4 {
            board.put(Pos::new(x, 9), Stone::Black);
        }

        let decision = AIEngine::new().search(&board, Player::Black, Player::White);
        assert_eq!(decision.best_move, Some(Pos::new(4, 9)));
        assert_eq!(decision.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        for x in 0..4 {
            board.put(Pos::new(x, 9), Stone::White);
        }
        board.put(Pos::new(5, 10), Stone::Black);

        let decision = AIEngine::new().search(&board, Player::Black, Player::White);
        assert_eq!(decision.best_move, Some(Pos::new(4, 9)));
        assert_eq!(decision.search_type, SearchType::Block);
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut board = Board::new();
        // Opponent threat comes earlier in scan order than our own win
        for x in 0..4 {
            board.put(Pos::new(x, 0), Stone::Black);
        }
        for x in 0..4 {
            board.put(Pos::new(x, 10), Stone::White);
        }

        let pos = select_move(&board, Player::White, Player::Black);
        assert_eq!(pos, Some(Pos::new(4, 10)));
    }

    #[test]
    fn test_first_win_in_scan_order() {
        let mut board = Board::new();
        // Open four on column 5: both (5, 2) and (5, 7) win, (5, 2) scans first
        for y in 3..7 {
            board.put(Pos::new(5, y), Stone::White);
        }
        assert_eq!(select_move(&board, Player::White, Player::Black), Some(Pos::new(5, 2)));
    }

    #[test]
    fn test_heuristic_extends_own_line() {
        let mut board = Board::new();
        board.put(Pos::new(7, 7), Stone::Black);
        board.put(Pos::new(6, 6), Stone::White);
        board.put(Pos::new(7, 6), Stone::White);

        let decision = AIEngine::new().search(&board, Player::White, Player::Black);
        assert_eq!(decision.search_type, SearchType::Heuristic);
        let pos = decision.best_move.unwrap();
        assert!(board.is_empty(pos));
        assert!(pos.manhattan(Pos::new(7, 7)) <= 3);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            board.put(Pos::from_index(idx), Stone::Blocked);
        }
        let decision = AIEngine::new().search(&board, Player::White, Player::Black);
        assert_eq!(decision.best_move, None);
        assert_eq!(decision.cells_examined, 0);
    }

    #[test]
    fn test_only_empty_cell_is_chosen() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            board.put(Pos::from_index(idx), Stone::Blocked);
        }
        board.put(Pos::new(14, 14), Stone::Empty);
        assert_eq!(select_move(&board, Player::White, Player::Black), Some(Pos::new(14, 14)));
    }

    #[test]
    fn test_custom_weights_change_preference() {
        let mut board = Board::new();
        board.put(Pos::new(0, 0), Stone::Black);
        board.put(Pos::new(1, 0), Stone::Black);
        // No centre pull and no attack: defense dominates near the black pair
        let engine = AIEngine::with_weights(ScoreWeights {
            attack: 0,
            defense: 1,
            center: 0,
        });
        let pos = engine.get_move(&board, Player::White).unwrap();
        assert_eq!(pos, Pos::new(2, 0));
    }

    #[test]
    fn test_equal_scores_keep_first_cell() {
        let engine = AIEngine::with_weights(ScoreWeights {
            attack: 0,
            defense: 0,
            center: 0,
        });
        let decision = engine.search(&Board::new(), Player::White, Player::Black);
        assert_eq!(decision.search_type, SearchType::Heuristic);
        assert_eq!(decision.best_move, Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_symmetric_position_prefers_earlier_row() {
        let mut board = Board::new();
        board.put(Pos::new(7, 7), Stone::Black);
        // (7, 6) and (7, 8) mirror each other and score the same
        assert_eq!(select_move(&board, Player::White, Player::Black), Some(Pos::new(7, 6)));
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let mut board = Board::new();
        for x in 0..4 {
            board.put(Pos::new(x, 3), Stone::Black);
        }
        let before = board.clone();
        let _ = select_move(&board, Player::White, Player::Black);
        assert_eq!(board, before);
    }
}
