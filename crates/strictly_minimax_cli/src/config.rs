//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::registry::{MAX_ID_LENGTH, MIN_ID_LENGTH};
use strictly_minimax::Symbol;
use tracing::{debug, info, instrument};

/// Which symbol the automated opponent plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum AiSide {
    /// The engine plays X and moves first.
    #[serde(rename = "X", alias = "x")]
    #[value(name = "X", alias = "x")]
    X,
    /// The engine plays O.
    #[serde(rename = "O", alias = "o")]
    #[value(name = "O", alias = "o")]
    O,
    /// Two humans share the board.
    #[serde(rename = "none")]
    #[value(name = "none")]
    None,
}

impl AiSide {
    /// Symbol handed to the engine session.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            AiSide::X => Some(Symbol::X),
            AiSide::O => Some(Symbol::O),
            AiSide::None => None,
        }
    }
}

/// Front-end settings, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Symbol the engine plays when a game does not say otherwise.
    #[serde(default = "default_ai_side")]
    ai_symbol: AiSide,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Length of generated game ids.
    #[serde(default = "default_id_length")]
    id_length: usize,
}

fn default_ai_side() -> AiSide {
    AiSide::O
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_id_length() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_symbol: default_ai_side(),
            log_filter: default_log_filter(),
            id_length: default_id_length(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(ai_symbol = ?config.ai_symbol, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if !(MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&config.id_length) {
            return Err(ConfigError::new(format!(
                "id_length must be between {} and {}, got {}",
                MIN_ID_LENGTH, MAX_ID_LENGTH, config.id_length
            )));
        }
        Ok(config)
    }

    /// Loads the file if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
