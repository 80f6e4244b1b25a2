//! Cached turn invariant: the stored current player matches the board.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: `current_player` equals the side to move derived from the board.
pub struct CachedTurnInvariant;

impl Invariant<GameSession> for CachedTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        session.current_player() == session.board().side_to_move()
    }

    fn description() -> &'static str {
        "Stored current player matches the side to move derived from the board"
    }
}
