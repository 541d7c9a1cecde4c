//! Room snapshot: the shape an online room stores and syncs
//!
//! ```json
//! {
//!   "gameState": [[0, 0, 1, ...], ...],
//!   "currentPlayer": 1,
//!   "gameStatus": "playing",
//!   "winner": 2
//! }
//! ```
//!
//! `gameState[y][x]` holds 0 (empty), 1 (black), 2 (white) or 3 (obstacle).
//! `winner` is only present once the room is finished; 0 means a draw.
//! Room identity, matchmaking and persistence stay with the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::board::{Board, Player};
use crate::engine::AIEngine;
use crate::error::SnapshotError;
use crate::rules::has_five;
use crate::session::{GameMode, GameSession, Status};

/// Lifecycle of a room as seen by the sync layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// Created, second player not joined yet
    Waiting,
    Playing,
    Finished,
}

/// Serializable room state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub game_state: Vec<Vec<u8>>,
    pub current_player: u8,
    pub game_status: RoomStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<u8>,
}

impl RoomSnapshot {
    /// Empty room waiting for its second player, Black to move
    pub fn waiting() -> Self {
        Self {
            game_state: Board::new().to_rows(),
            current_player: Player::Black.code(),
            game_status: RoomStatus::Waiting,
            winner: None,
        }
    }

    /// Rebuild the board
    pub fn board(&self) -> Result<Board, SnapshotError> {
        Board::from_rows(&self.game_state)
    }

    /// Decode `currentPlayer`
    pub fn current_player(&self) -> Result<Player, SnapshotError> {
        Player::from_code(self.current_player).ok_or_else(|| {
            SnapshotError::new(format!("invalid currentPlayer {}", self.current_player))
        })
    }

    /// Session status implied by `gameStatus` and `winner`
    pub fn status(&self) -> Result<Status, SnapshotError> {
        match (self.game_status, self.winner) {
            (RoomStatus::Waiting | RoomStatus::Playing, _) => Ok(Status::Playing),
            (RoomStatus::Finished, None | Some(0)) => Ok(Status::Draw),
            (RoomStatus::Finished, Some(code)) => Player::from_code(code)
                .map(Status::Won)
                .ok_or_else(|| SnapshotError::new(format!("invalid winner {}", code))),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl GameSession {
    /// Current state in room-sync shape
    pub fn snapshot(&self) -> RoomSnapshot {
        let (game_status, winner) = match self.status() {
            Status::Playing => (RoomStatus::Playing, None),
            Status::Won(player) => (RoomStatus::Finished, Some(player.code())),
            Status::Draw => (RoomStatus::Finished, Some(0)),
        };
        RoomSnapshot {
            game_state: self.board().to_rows(),
            current_player: self.current_player().code(),
            game_status,
            winner,
        }
    }

    /// Rehydrate a session from a room snapshot.
    ///
    /// The snapshot's history is not part of the shape, so the resumed
    /// session starts with an empty history.
    #[instrument(skip(snapshot, engine), fields(status = ?snapshot.game_status))]
    pub fn from_snapshot(
        snapshot: &RoomSnapshot,
        mode: GameMode,
        engine: AIEngine,
    ) -> Result<Self, SnapshotError> {
        let board = snapshot.board()?;
        let current = snapshot.current_player()?;
        let status = snapshot.status()?;

        if status == Status::Playing && board.is_full() {
            warn!("Room marked playing with a full board");
            return Err(SnapshotError::new("room is playing but the board is full"));
        }
        if status == Status::Playing
            && (has_five(&board, Player::Black) || has_five(&board, Player::White))
        {
            warn!("Room marked playing with a completed five");
            return Err(SnapshotError::new("room is playing but already has five in a row"));
        }

        debug!(stones = board.stone_count(), %current, "Session restored from snapshot");
        Ok(GameSession::resume(mode, engine, board, current, status))
    }
}
