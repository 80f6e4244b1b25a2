//! Command-line interface for strictly_minimax.

use crate::config::AiSide;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Minimax - tic-tac-toe against an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe engine with exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine in the terminal
    Play {
        /// Symbol the engine plays (overrides the config file)
        #[arg(long, value_enum)]
        ai: Option<AiSide>,
    },

    /// Let the engine play both sides and print every ply
    SelfPlay,

    /// Print the engine's move for a board such as "X.O/.X./..."
    BestMove {
        /// Three `/`-separated rows of `X`, `O` and `.`
        #[arg(long)]
        board: String,
    },

    /// Host games over a JSON-lines protocol on stdin/stdout
    Stdio,
}
