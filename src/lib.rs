//! Gomoku board engine
//!
//! The rules and AI shared by every play mode of a casual five-in-a-row
//! game (against the computer, two players on one device, fun mode with
//! obstacles, and online rooms):
//! - 15x15 board
//! - 5-in-a-row to win, overlines allowed, no forbidden moves
//! - Obstacle cells that fill space but never join a line
//!
//! # Architecture
//!
//! - [`board`]: Board, cell and position types
//! - [`rules`]: Legality, win and draw checks
//! - [`eval`]: Heuristic cell scoring
//! - [`engine`]: Move selection for the computer player
//! - [`session`]: Turn order, history and game status
//! - [`snapshot`]: Room-sync shape for online play
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameMode, GameSession, Player, Status};
//!
//! let mut session = GameSession::new(GameMode::VsAi { human: Player::Black });
//! session.apply_move(7, 7).unwrap();
//!
//! // Engine replies as White
//! let reply = session.play_ai_move().unwrap().unwrap();
//! println!("AI plays at {}", reply.pos);
//! assert_eq!(session.status(), Status::Playing);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod session;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{select_move, AIEngine, Decision, SearchType};
pub use error::{ConfigError, GameError, SnapshotError};
pub use session::{GameMode, GameSession, Move, MoveResult, Status};
pub use snapshot::{RoomSnapshot, RoomStatus};
