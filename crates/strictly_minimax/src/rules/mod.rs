//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]: who has won, whether play is over, and
//! what a finished board is worth.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winner;

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::types::{Outcome, Symbol};

/// True once somebody has won or no empty cell remains.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Classifies the board.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(symbol) => Outcome::Won(symbol),
        None if is_full(board) => Outcome::Drawn,
        None => Outcome::InProgress,
    }
}

/// Value of a terminal board from X's point of view: `+1`, `-1` or `0`.
///
/// Fails with [`EngineError::InvalidState`] while the game is still running.
pub fn utility(board: &Board) -> EngineResult<i8> {
    match outcome(board) {
        Outcome::Won(Symbol::X) => Ok(1),
        Outcome::Won(Symbol::O) => Ok(-1),
        Outcome::Drawn => Ok(0),
        Outcome::InProgress => Err(EngineError::InvalidState),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_in_progress() {
        let board: Board = ".../.X./...".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::InProgress);
        assert!(!is_terminal(&board));
        assert_eq!(utility(&board), Err(EngineError::InvalidState));
    }

    #[test]
    fn test_outcome_won_by_o() {
        let board: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Won(Symbol::O));
        assert_eq!(utility(&board), Ok(-1));
    }

    #[test]
    fn test_outcome_drawn() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Drawn);
        assert!(is_terminal(&board));
        assert_eq!(utility(&board), Ok(0));
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Won(Symbol::X));
        assert_eq!(utility(&board), Ok(1));
    }
}
