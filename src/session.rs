//! Game session: turn order, move history and terminal state
//!
//! A [`GameSession`] owns the board and is the only thing that mutates it
//! during play. Presentation or network collaborators resolve their input to
//! a board cell and call [`GameSession::apply_move`]; the returned
//! [`MoveResult`] tells them what to render or persist.
//!
//! Every play mode shares this state machine:
//!
//! ```text
//!            apply_move (no win, board not full)
//!           ┌──────────────┐
//!           ▼              │
//!        Playing ──────────┘
//!         │    │
//!   five  │    │ board full
//!         ▼    ▼
//!   Won(player)  Draw        (terminal: apply_move -> GameOver)
//! ```

use crate::board::{Board, Player, Pos, Stone};
use crate::engine::AIEngine;
use crate::error::GameError;
use crate::rules::{check_draw, check_win, winning_line};
use tracing::{debug, info, instrument};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    VsAi { human: Player },
    /// Two players sharing one device
    LocalPvP,
    /// Two players sharing one device, with obstacle skills
    FunMode,
    /// Online room; `role` is the side played from this client
    Online { role: Player },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsAi {
            human: Player::Black,
        }
    }
}

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won(Player),
    Draw,
}

impl Status {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Playing)
    }
}

/// An applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub player: Player,
}

/// Outcome of an accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub pos: Pos,
    pub player: Player,
    /// Status after the move
    pub status: Status,
    /// Stones forming the five, when the move won
    pub winning_line: Option<Vec<Pos>>,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    mode: GameMode,
    current: Player,
    status: Status,
    history: Vec<Move>,
    engine: AIEngine,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self::with_engine(mode, AIEngine::new())
    }

    /// Session whose computer player (and hints) use the given engine
    pub fn with_engine(mode: GameMode, engine: AIEngine) -> Self {
        Self {
            board: Board::new(),
            mode,
            current: Player::Black,
            status: Status::Playing,
            history: Vec::new(),
            engine,
        }
    }

    /// Resume from an existing position, as after a room sync.
    ///
    /// History starts empty; nothing before this point can be undone.
    pub(crate) fn resume(
        mode: GameMode,
        engine: AIEngine,
        board: Board,
        current: Player,
        status: Status,
    ) -> Self {
        Self {
            board,
            mode,
            current,
            status,
            history: Vec::new(),
            engine,
        }
    }

    /// Clear the board and start again with Black to move
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = Player::Black;
        self.status = Status::Playing;
        self.history.clear();
        info!(mode = ?self.mode, "Game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    /// Check if a person should move now (always true outside `VsAi`)
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::VsAi { human } => self.current == human,
            GameMode::LocalPvP | GameMode::FunMode | GameMode::Online { .. } => true,
        }
    }

    /// Check if it's the engine's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// In an online room, whether this client is the one to move
    pub fn is_local_turn(&self) -> bool {
        match self.mode {
            GameMode::Online { role } => self.current == role,
            _ => self.is_human_turn(),
        }
    }

    /// Place the current player's stone at `(x, y)`.
    ///
    /// Either the move is applied in full (board, history, status, turn) or
    /// nothing changes and an error is returned.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn apply_move(&mut self, x: i32, y: i32) -> Result<MoveResult, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        let pos = Pos::try_new(x, y).ok_or(GameError::OutOfBounds { x, y })?;
        if !self.board.is_empty(pos) {
            return Err(GameError::IllegalMove(pos));
        }

        let player = self.current;
        self.board.put(pos, player.stone());
        self.history.push(Move { pos, player });

        let mut line = None;
        if check_win(&self.board, pos, player) {
            line = winning_line(&self.board, pos, player);
            self.status = Status::Won(player);
            info!(%pos, winner = %player, moves = self.history.len(), "Game won");
        } else if check_draw(&self.board) {
            self.status = Status::Draw;
            info!(moves = self.history.len(), "Game drawn");
        } else {
            self.current = player.opponent();
            debug!(%pos, next = %self.current, "Move applied");
        }

        Ok(MoveResult {
            pos,
            player,
            status: self.status,
            winning_line: line,
        })
    }

    /// Let the engine move when it is its turn in a `VsAi` game.
    ///
    /// Returns `Ok(None)` when it is not the engine's turn.
    pub fn play_ai_move(&mut self) -> Result<Option<MoveResult>, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_ai_turn() {
            return Ok(None);
        }

        let ai = self.current;
        let decision = self.engine.search(&self.board, ai, ai.opponent());
        debug!(search_type = ?decision.search_type, time_ms = decision.time_ms, "Engine decided");
        match decision.best_move {
            Some(pos) => self.apply_move(i32::from(pos.x), i32::from(pos.y)).map(Some),
            // Unreachable while Playing: a full board is already a draw
            None => Err(GameError::GameOver),
        }
    }

    /// Engine recommendation for whoever is to move
    pub fn suggest_move(&self) -> Option<Pos> {
        if self.status.is_over() {
            return None;
        }
        self.engine.get_move(&self.board, self.current)
    }

    /// Drop a permanent obstacle on an empty cell (fun-mode skill).
    ///
    /// The turn does not pass. Obstacles are not part of the move history
    /// and stay on the board through undo. Filling the last empty cell with
    /// an obstacle draws the game.
    #[instrument(skip(self))]
    pub fn place_obstacle(&mut self, x: i32, y: i32) -> Result<Status, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        let pos = Pos::try_new(x, y).ok_or(GameError::OutOfBounds { x, y })?;
        if !self.board.is_empty(pos) {
            return Err(GameError::IllegalMove(pos));
        }

        self.board.put(pos, Stone::Blocked);
        if check_draw(&self.board) {
            self.status = Status::Draw;
            info!("Obstacle filled the board");
        }
        Ok(self.status)
    }

    /// Take back the last two plies (engine reply and the human move).
    ///
    /// Only available against the engine. Does nothing and returns `false`
    /// with fewer than two moves or once the game is over.
    pub fn undo_last_exchange(&mut self) -> bool {
        if !matches!(self.mode, GameMode::VsAi { .. })
            || self.status.is_over()
            || self.history.len() < 2
        {
            return false;
        }

        for _ in 0..2 {
            if let Some(last) = self.history.pop() {
                self.board.put(last.pos, Stone::Empty);
            }
        }
        // Two plies removed: the same side is to move again
        debug!(remaining = self.history.len(), "Undid last exchange");
        true
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
