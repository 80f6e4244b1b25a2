//! Strictly Minimax front end
//!
//! Hosts engine sessions for humans and programs:
//!
//! - **Play**: interactive terminal game against the engine
//! - **Self-play**: the engine against itself
//! - **Stdio**: JSON-lines protocol over an in-memory game registry
//! - **Config**: TOML settings with CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;
mod protocol;
mod registry;

pub use cli::{Cli, Command};
pub use config::{AiSide, Config, ConfigError};
pub use play::{parse_move, play_game, self_play};
pub use protocol::{GameHost, Request, Response, status_of};
pub use registry::{
    GameId, GameRecord, GameRegistry, MAX_ID_LENGTH, MIN_ID_LENGTH, RegistryError,
};

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
