//! Error types for board access, move application and snapshot handling.

use crate::board::Pos;
use derive_more::{Display, Error};

/// Errors returned by board and session operations.
///
/// All of these are recoverable: a failed call leaves the board and the
/// session exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameError {
    /// Coordinate outside the board.
    #[display("Position ({x}, {y}) is off the board")]
    OutOfBounds { x: i32, y: i32 },

    /// Target cell is already occupied.
    #[display("Illegal move at {_0}")]
    IllegalMove(Pos),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for GameError {}

/// A room snapshot that cannot be turned back into a board or session.
#[derive(Debug, Clone, Display, Error)]
#[display("Snapshot error: {} at {}:{}", message, file, line)]
pub struct SnapshotError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SnapshotError {
    /// Creates a new snapshot error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Configuration loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_messages() {
        let err = GameError::OutOfBounds { x: 15, y: -1 };
        assert_eq!(err.to_string(), "Position (15, -1) is off the board");
        let err = GameError::IllegalMove(Pos::new(3, 4));
        assert_eq!(err.to_string(), "Illegal move at (3, 4)");
        assert_eq!(GameError::GameOver.to_string(), "Game is already over");
    }

    #[test]
    fn test_snapshot_error_tracks_location() {
        let err = SnapshotError::new("bad row");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("Snapshot error: bad row at"));
    }
}
