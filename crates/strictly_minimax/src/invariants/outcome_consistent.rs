//! Outcome consistency invariant.

use super::Invariant;
use crate::rules::outcome;
use crate::session::GameSession;

/// Invariant: the stored outcome is the outcome of the stored board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameSession> for OutcomeConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        session.outcome() == outcome(&session.board())
    }

    fn description() -> &'static str {
        "Stored outcome matches the board"
    }
}
