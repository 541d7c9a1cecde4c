//! Gomoku console driver
//!
//! Stands in for the presentation layer: reads moves from stdin, prints the
//! board, and lets the engine reply.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Input};
use gomoku::{GameConfig, GameMode, GameSession, Player, RoomSnapshot, Status};
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, mode, human } => run_play(config, mode, human),
        Command::Suggest { snapshot, side } => run_suggest(snapshot, side),
        Command::Selfplay { max_moves } => run_selfplay(max_moves),
    }
}

/// Interactive game in the terminal
fn run_play(
    config_path: Option<PathBuf>,
    mode: Option<cli::ModeArg>,
    human: Option<cli::Side>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => GameConfig::from_file(&path)?,
        None => GameConfig::default(),
    };
    if let Some(mode) = mode {
        config.mode = mode.into();
    }
    if let Some(human) = human {
        config.human = human.into();
    }

    let mut session = GameSession::with_engine(config.game_mode(), config.engine());
    info!(mode = ?session.mode(), "Starting game");
    println!("Enter moves as `x y`. Commands: undo, hint, block x y, reset, quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if session.status() == Status::Playing && session.is_ai_turn() {
            std::thread::sleep(config.think_delay());
            if let Some(reply) = session.play_ai_move()? {
                println!("Engine plays {}", reply.pos);
            }
            continue;
        }

        println!("{}", session.board());
        print_status(&session);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let Some(input) = Input::parse(&line) else {
            println!("Could not read `{}`", line.trim());
            continue;
        };

        match input {
            Input::Quit => break,
            Input::Reset => session.reset(),
            Input::Undo => {
                if !session.undo_last_exchange() {
                    println!("Nothing to undo");
                }
            }
            Input::Hint => match session.suggest_move() {
                Some(pos) => println!("Try {}", pos),
                None => println!("No hint available"),
            },
            Input::Block(x, y) => {
                if session.mode() != GameMode::FunMode {
                    println!("Obstacles are only available in fun mode");
                } else if let Err(err) = session.place_obstacle(x, y) {
                    warn!(%err, "Obstacle rejected");
                    println!("{}", err);
                }
            }
            Input::Place(x, y) => {
                if let Err(err) = session.apply_move(x, y) {
                    println!("{}", err);
                }
            }
        }
    }

    Ok(())
}

fn print_status(session: &GameSession) {
    match session.status() {
        Status::Playing => println!("{} to move", session.current_player()),
        Status::Won(player) => println!("{} wins! Type `reset` to play again.", player),
        Status::Draw => println!("Draw! Type `reset` to play again."),
    }
}

/// Engine move for a stored room
#[instrument(skip(path), fields(path = %path.display()))]
fn run_suggest(path: PathBuf, side: Option<cli::Side>) -> Result<()> {
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let snapshot = RoomSnapshot::from_json(&json)?;
    let board = snapshot.board()?;
    let player: Player = match side {
        Some(side) => side.into(),
        None => snapshot.current_player()?,
    };

    let decision = gomoku::AIEngine::new().search(&board, player, player.opponent());
    let output = json!({
        "player": player.code(),
        "move": decision.best_move.map(|pos| json!({ "x": pos.x, "y": pos.y })),
        "searchType": format!("{:?}", decision.search_type),
        "score": decision.score,
    });
    println!("{}", output);
    Ok(())
}

/// Engine against itself until the game ends or `max_moves` is reached
fn run_selfplay(max_moves: usize) -> Result<()> {
    let mut session = GameSession::new(GameMode::LocalPvP);

    while session.status() == Status::Playing && session.history().len() < max_moves {
        let Some(pos) = session.suggest_move() else {
            break;
        };
        session.apply_move(i32::from(pos.x), i32::from(pos.y))?;
    }

    println!("{}", session.board());
    print_status(&session);
    println!("{} moves played", session.history().len());
    Ok(())
}
