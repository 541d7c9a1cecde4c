//! Command-line interface for the gomoku driver.

use clap::{Parser, Subcommand, ValueEnum};
use gomoku::config::ModeKind;
use gomoku::Player;
use std::path::PathBuf;

/// Gomoku - five in a row against the engine or a friend
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Freestyle Gomoku on a 15x15 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Side played by the person against the engine
        #[arg(long, value_enum)]
        human: Option<Side>,
    },

    /// Print the engine's move for a room snapshot (JSON file)
    Suggest {
        /// Snapshot file in room-sync shape
        snapshot: PathBuf,

        /// Side to suggest for (defaults to the snapshot's currentPlayer)
        #[arg(long = "as", value_enum)]
        side: Option<Side>,
    },

    /// Let the engine play both sides
    Selfplay {
        /// Stop after this many moves
        #[arg(long, default_value = "225")]
        max_moves: usize,
    },
}

/// Mode names accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Ai,
    Pvp,
    Fun,
}

impl From<ModeArg> for ModeKind {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Ai => ModeKind::Ai,
            ModeArg::Pvp => ModeKind::Pvp,
            ModeArg::Fun => ModeKind::Fun,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Black,
    White,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Player::Black,
            Side::White => Player::White,
        }
    }
}

/// A line typed during `play`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Place(i32, i32),
    Block(i32, i32),
    Undo,
    Hint,
    Reset,
    Quit,
}

impl Input {
    /// Parse `x y`, `block x y`, `undo`, `hint`, `reset` or `quit`
    pub fn parse(line: &str) -> Option<Input> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["undo"] => Some(Input::Undo),
            ["hint"] => Some(Input::Hint),
            ["reset"] => Some(Input::Reset),
            ["quit"] | ["q"] | ["exit"] => Some(Input::Quit),
            ["block", x, y] => Some(Input::Block(x.parse().ok()?, y.parse().ok()?)),
            [x, y] => Some(Input::Place(x.parse().ok()?, y.parse().ok()?)),
            _ => None,
        }
    }
}
