//! Per-game session state machine.
//!
//! A session sequences human and automated moves over one board. The side
//! to move is always derived from the board; the session only caches it.
//! Once the outcome is decided the session is frozen until [`GameSession::reset`].

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::invariants::assert_invariants;
use crate::moves::legal_actions;
use crate::rules::outcome;
use crate::search::best_move;
use crate::types::{Action, Outcome, Symbol};
use tracing::{debug, info, instrument, warn};

/// Whose input the session is waiting for, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// A human must submit the next move for this symbol.
    AwaitingHuman(Symbol),
    /// The automated opponent plays this symbol next.
    AwaitingAutomated(Symbol),
    /// The game is over.
    Finished(Outcome),
}

/// State of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Symbol,
    automated_symbol: Option<Symbol>,
    outcome: Outcome,
}

impl GameSession {
    /// Creates a session on the empty board with X to move.
    pub fn new(automated_symbol: Option<Symbol>) -> Self {
        Self {
            board: Board::empty(),
            current_player: Symbol::X,
            automated_symbol,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the cached side to move.
    pub fn current_player(&self) -> Symbol {
        self.current_player
    }

    /// Returns the symbol played by the automated opponent.
    pub fn automated_symbol(&self) -> Option<Symbol> {
        self.automated_symbol
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns whose input the session is waiting for.
    pub fn turn(&self) -> Turn {
        if self.is_terminal() {
            Turn::Finished(self.outcome)
        } else if Some(self.current_player) == self.automated_symbol {
            Turn::AwaitingAutomated(self.current_player)
        } else {
            Turn::AwaitingHuman(self.current_player)
        }
    }

    /// Plays one move and returns the action that was applied.
    ///
    /// On the automated opponent's turn the move comes from [`best_move`]
    /// and `submitted` is ignored. Otherwise `submitted` is required.
    /// On failure the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the game has already ended
    /// - [`EngineError::MissingMove`] on a human turn without a move
    /// - [`EngineError::IllegalMove`] if the cell is not free
    #[instrument(skip(self), fields(mover = %self.board.side_to_move(), outcome = ?self.outcome))]
    pub fn apply_turn(&mut self, submitted: Option<Action>) -> EngineResult<Action> {
        if self.is_terminal() {
            warn!("Move attempted on a finished game");
            return Err(EngineError::GameOver);
        }

        let mover = self.board.side_to_move();
        let action = if Some(mover) == self.automated_symbol {
            if submitted.is_some() {
                debug!("Ignoring submitted move on the automated turn");
            }
            best_move(&self.board)?
        } else {
            submitted.ok_or_else(|| {
                warn!("Human turn submitted without a move");
                EngineError::MissingMove
            })?
        };

        if !legal_actions(&self.board).contains(&action) {
            warn!(%action, "Rejected illegal move");
            return Err(EngineError::IllegalMove(action));
        }

        let board = self.board.apply(action, mover)?;

        // Commit only after every fallible step has succeeded.
        self.board = board;
        self.current_player = board.side_to_move();
        self.outcome = outcome(&board);
        assert_invariants(self);

        info!(%action, %mover, outcome = ?self.outcome, "Move applied");
        Ok(action)
    }

    /// Starts over on the empty board with a new automated symbol.
    #[instrument(skip(self))]
    pub fn reset(&mut self, automated_symbol: Option<Symbol>) {
        *self = Self::new(automated_symbol);
        info!("Session reset");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(row: usize, column: usize) -> Action {
        Action::new(row, column).unwrap()
    }

    #[test]
    fn test_new_session_awaits_x() {
        let session = GameSession::new(Some(Symbol::O));
        assert_eq!(session.turn(), Turn::AwaitingHuman(Symbol::X));
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.board(), Board::empty());
    }

    #[test]
    fn test_automated_x_moves_first() {
        let mut session = GameSession::new(Some(Symbol::X));
        assert_eq!(session.turn(), Turn::AwaitingAutomated(Symbol::X));
        assert_eq!(session.apply_turn(None), Ok(action(0, 0)));
        assert_eq!(session.turn(), Turn::AwaitingHuman(Symbol::O));
    }

    #[test]
    fn test_missing_move_leaves_session_unchanged() {
        let mut session = GameSession::new(None);
        let before = session.clone();
        assert_eq!(session.apply_turn(None), Err(EngineError::MissingMove));
        assert_eq!(session, before);
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let mut session = GameSession::new(None);
        session.apply_turn(Some(action(1, 1))).unwrap();
        let before = session.clone();
        assert_eq!(
            session.apply_turn(Some(action(1, 1))),
            Err(EngineError::IllegalMove(action(1, 1)))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_submitted_move_ignored_on_automated_turn() {
        let mut session = GameSession::new(Some(Symbol::O));
        session.apply_turn(Some(action(1, 1))).unwrap();
        // (2, 2) is offered, the engine still answers with its own choice.
        assert_eq!(session.apply_turn(Some(action(2, 2))), Ok(action(0, 0)));
    }

    #[test]
    fn test_reset_clears_board_and_swaps_automated_symbol() {
        let mut session = GameSession::new(Some(Symbol::O));
        session.apply_turn(Some(action(0, 0))).unwrap();
        session.apply_turn(None).unwrap();

        session.reset(Some(Symbol::X));
        assert_eq!(session, GameSession::new(Some(Symbol::X)));
        assert_eq!(session.current_player(), Symbol::X);
    }
}
