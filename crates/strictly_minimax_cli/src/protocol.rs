//! JSON-lines game host.
//!
//! Each input line is one [`Request`]; each output line is one [`Response`].
//! Status codes follow HTTP conventions so that a web front end can forward
//! them unchanged.

use crate::config::AiSide;
use crate::registry::{GameId, GameRecord, GameRegistry, RegistryError};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use strictly_minimax::{Action, EngineError};
use tracing::{debug, info, instrument, warn};

/// A client request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Start a new game.
    Create {
        /// Engine symbol; the configured default when absent.
        #[serde(default)]
        ai_symbol: Option<AiSide>,
    },
    /// List every game.
    List,
    /// Fetch one game.
    Get {
        /// Game id.
        id: GameId,
    },
    /// Play one turn. The action may be omitted on the engine's turn.
    Play {
        /// Game id.
        id: GameId,
        /// Human move.
        #[serde(default)]
        action: Option<Action>,
    },
    /// Start the game over under the same id.
    Reset {
        /// Game id.
        id: GameId,
        /// Engine symbol; the configured default when absent.
        #[serde(default)]
        ai_symbol: Option<AiSide>,
    },
}

/// A reply to one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// A single game.
    Game {
        /// Status code.
        status: u16,
        /// The game.
        game: GameRecord,
    },
    /// Every game.
    Games {
        /// Status code.
        status: u16,
        /// The games.
        games: Vec<GameRecord>,
    },
    /// The request failed.
    Error {
        /// Status code.
        status: u16,
        /// Human-readable reason.
        detail: String,
    },
}

impl Response {
    /// Status code of the response.
    pub fn status(&self) -> u16 {
        match self {
            Response::Game { status, .. }
            | Response::Games { status, .. }
            | Response::Error { status, .. } => *status,
        }
    }

    fn game(game: GameRecord) -> Self {
        Response::Game { status: 200, game }
    }

    fn error(status: u16, detail: impl Into<String>) -> Self {
        Response::Error {
            status,
            detail: detail.into(),
        }
    }
}

/// Status code reported for a registry failure.
pub fn status_of(error: &RegistryError) -> u16 {
    match error {
        RegistryError::NotFound { .. } => 404,
        RegistryError::InvalidIdLength { .. } | RegistryError::IdSpaceExhausted { .. } => 500,
        RegistryError::Engine(EngineError::InvalidState) => 500,
        RegistryError::Engine(_) => 400,
    }
}

impl From<RegistryError> for Response {
    fn from(error: RegistryError) -> Self {
        Response::error(status_of(&error), error.to_string())
    }
}

/// Serves requests against one registry.
#[derive(Debug, Clone)]
pub struct GameHost {
    registry: GameRegistry,
    default_ai: AiSide,
}

impl GameHost {
    /// Creates a host; games without an explicit engine symbol get `default_ai`.
    pub fn new(registry: GameRegistry, default_ai: AiSide) -> Self {
        Self {
            registry,
            default_ai,
        }
    }

    /// Returns the registry.
    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    /// Executes one request.
    #[instrument(skip(self))]
    pub fn handle(&mut self, request: Request) -> Response {
        let result = match request {
            Request::Create { ai_symbol } => {
                let side = ai_symbol.unwrap_or(self.default_ai);
                self.registry.create(side.symbol()).map(Response::game)
            }
            Request::List => Ok(Response::Games {
                status: 200,
                games: self.registry.list(),
            }),
            Request::Get { id }
            | Request::Play { id, .. }
            | Request::Reset { id, .. }
                if id.chars().count() != self.registry.id_length() =>
            {
                warn!(game_id = %id, "Rejected malformed game id");
                return Response::error(
                    422,
                    format!(
                        "Malformed game id: expected {} characters, got {:?}",
                        self.registry.id_length(),
                        id
                    ),
                );
            }
            Request::Get { id } => self.registry.get(&id).map(Response::game),
            Request::Play { id, action } => self.registry.play(&id, action).map(Response::game),
            Request::Reset { id, ai_symbol } => {
                let side = ai_symbol.unwrap_or(self.default_ai);
                self.registry.reset(&id, side.symbol()).map(Response::game)
            }
        };

        result.unwrap_or_else(|error| {
            warn!(%error, "Request rejected");
            Response::from(error)
        })
    }

    /// Parses and executes one line of input.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(error) => {
                debug!(%error, "Malformed request");
                Response::error(422, format!("Malformed request: {}", error))
            }
        }
    }

    /// Serves requests until the input ends. Blank lines are skipped.
    #[instrument(skip_all)]
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        info!("Serving JSON-lines requests");
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line);
            serde_json::to_writer(&mut output, &response)?;
            writeln!(output)?;
            output.flush()?;
        }
        info!(games = self.registry.len(), "Input closed");
        Ok(())
    }
}
