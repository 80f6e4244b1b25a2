//! In-memory game registry keyed by opaque ids.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strictly_minimax::{Action, EngineError, GameSession, GameView, Symbol};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game.
pub type GameId = String;

/// Shortest id length a registry accepts.
pub const MIN_ID_LENGTH: usize = 8;

/// Longest id length a registry accepts: every hex digit of a UUID.
pub const MAX_ID_LENGTH: usize = 32;

/// Fresh ids drawn before `create` gives up.
const MAX_ID_ATTEMPTS: usize = 64;

/// A game as returned to clients: its id plus the session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game id.
    pub id: GameId,
    /// Session snapshot.
    #[serde(flatten)]
    pub view: GameView,
}

/// Registry failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum RegistryError {
    /// No game has this id.
    #[display("Game not found: {}", id)]
    NotFound {
        /// Requested id.
        id: GameId,
    },

    /// Ids of this length are too short to stay unique, or longer than a UUID.
    #[display(
        "id_length must be between {} and {}, got {}",
        MIN_ID_LENGTH,
        MAX_ID_LENGTH,
        length
    )]
    InvalidIdLength {
        /// Requested length.
        length: usize,
    },

    /// No unused id was found within the retry limit.
    #[display("No unused game id after {} attempts", attempts)]
    IdSpaceExhausted {
        /// Ids drawn before giving up.
        attempts: usize,
    },

    /// The engine rejected the transition.
    #[from]
    #[display("{}", _0)]
    Engine(EngineError),
}

/// Owns every live game session.
///
/// Each id maps to exactly one session for the lifetime of the registry;
/// reset replaces the session state but keeps the id.
#[derive(Debug, Clone)]
pub struct GameRegistry {
    games: BTreeMap<GameId, GameSession>,
    id_length: usize,
}

impl GameRegistry {
    /// Creates an empty registry generating ids of `id_length` characters.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidIdLength`] unless `id_length` lies in
    /// [`MIN_ID_LENGTH`]`..=`[`MAX_ID_LENGTH`].
    #[instrument]
    pub fn new(id_length: usize) -> Result<Self, RegistryError> {
        if !(MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&id_length) {
            warn!("Rejected id length");
            return Err(RegistryError::InvalidIdLength { length: id_length });
        }
        info!("Creating game registry");
        Ok(Self::with_id_length(id_length))
    }

    fn with_id_length(id_length: usize) -> Self {
        Self {
            games: BTreeMap::new(),
            id_length,
        }
    }

    /// Length of the ids this registry hands out.
    pub fn id_length(&self) -> usize {
        self.id_length
    }

    /// Returns a fresh id: the leading hex digits of a v4 UUID, upper-cased.
    fn generate_id(&self) -> Result<GameId, RegistryError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id: GameId = uuid::Uuid::new_v4()
                .simple()
                .to_string()
                .chars()
                .take(self.id_length)
                .collect::<String>()
                .to_uppercase();
            if !self.games.contains_key(&id) {
                return Ok(id);
            }
            debug!(%id, "Generated id collided, retrying");
        }
        warn!(games = self.games.len(), "Id space exhausted");
        Err(RegistryError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Creates a new game and returns its record.
    ///
    /// # Errors
    ///
    /// [`RegistryError::IdSpaceExhausted`] if no unused id turns up.
    #[instrument(skip(self))]
    pub fn create(
        &mut self,
        automated_symbol: Option<Symbol>,
    ) -> Result<GameRecord, RegistryError> {
        let id = self.generate_id()?;
        let session = GameSession::new(automated_symbol);
        let record = Self::record(&id, &session);
        self.games.insert(id.clone(), session);
        info!(game_id = %id, "Created new game");
        Ok(record)
    }

    /// Looks up a game.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<GameRecord, RegistryError> {
        self.session(id).map(|session| Self::record(id, session))
    }

    /// Lists all games ordered by id.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<GameRecord> {
        let records: Vec<_> = self
            .games
            .iter()
            .map(|(id, session)| Self::record(id, session))
            .collect();
        debug!(count = records.len(), "Listed games");
        records
    }

    /// Plays one turn of a game.
    ///
    /// A rejected turn leaves the stored session untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, id: &str, action: Option<Action>) -> Result<GameRecord, RegistryError> {
        let session = self.games.get_mut(id).ok_or_else(|| {
            warn!(game_id = id, "Game not found");
            RegistryError::NotFound { id: id.to_string() }
        })?;
        let applied = session.apply_turn(action)?;
        info!(game_id = id, %applied, outcome = ?session.outcome(), "Turn played");
        Ok(Self::record(id, session))
    }

    /// Resets a game to the empty board under the same id.
    #[instrument(skip(self))]
    pub fn reset(
        &mut self,
        id: &str,
        automated_symbol: Option<Symbol>,
    ) -> Result<GameRecord, RegistryError> {
        let session = self.games.get_mut(id).ok_or_else(|| {
            warn!(game_id = id, "Game not found");
            RegistryError::NotFound { id: id.to_string() }
        })?;
        session.reset(automated_symbol);
        Ok(Self::record(id, session))
    }

    /// Number of stored games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// True when no game is stored.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn session(&self, id: &str) -> Result<&GameSession, RegistryError> {
        self.games.get(id).ok_or_else(|| {
            debug!(game_id = id, "Game not found");
            RegistryError::NotFound { id: id.to_string() }
        })
    }

    fn record(id: &str, session: &GameSession) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            view: GameView::from(session),
        }
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::with_id_length(10)
    }
}
