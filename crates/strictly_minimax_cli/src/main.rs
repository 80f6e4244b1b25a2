//! Strictly Minimax - Unified CLI
//!
//! Tic-tac-toe against an exhaustive minimax opponent.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_minimax::{Board, GameSession, best_move, empty_board};
use strictly_minimax_cli::{
    AiSide, Cli, Command, Config, GameHost, GameRegistry, init_tracing, play_game, self_play,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play { ai } => run_play(ai.unwrap_or(*config.ai_symbol())),
        Command::SelfPlay => {
            self_play(empty_board(), std::io::stdout().lock())?;
            Ok(())
        }
        Command::BestMove { board } => run_best_move(&board),
        Command::Stdio => run_stdio(&config),
    }
}

/// Run an interactive game on the terminal
#[instrument]
fn run_play(ai: AiSide) -> Result<()> {
    info!(?ai, "Starting terminal game");
    let mut session = GameSession::new(ai.symbol());
    let stdin = std::io::stdin();
    play_game(stdin.lock(), std::io::stdout().lock(), &mut session)?;
    Ok(())
}

/// Print the engine's move for one board
#[instrument]
fn run_best_move(board: &str) -> Result<()> {
    let board: Board = board.parse()?;
    let action = best_move(&board)?;
    println!("{}", serde_json::to_string(&action)?);
    Ok(())
}

/// Serve the JSON-lines protocol on stdin/stdout
#[instrument(skip(config))]
fn run_stdio(config: &Config) -> Result<()> {
    let registry = GameRegistry::new(*config.id_length())?;
    let mut host = GameHost::new(registry, *config.ai_symbol());
    let stdin = std::io::stdin();
    host.serve(stdin.lock(), std::io::stdout().lock())
}
