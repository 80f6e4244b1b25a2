//! Mark parity invariant: X never trails O and never leads by two.

use super::Invariant;
use crate::board::Board;
use crate::session::GameSession;
use crate::types::Symbol;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// Holds for every board reachable by alternating play starting with X.
pub struct MarkParityInvariant;

impl Invariant<Board> for MarkParityInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Symbol::X);
        let o = board.count(Symbol::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has placed as many marks as O, or one more"
    }
}

impl Invariant<GameSession> for MarkParityInvariant {
    fn holds(session: &GameSession) -> bool {
        <Self as Invariant<Board>>::holds(&session.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
