//! Full-board detection.

use crate::board::Board;

/// Checks if every cell holds a mark.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, Symbol};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::empty()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::empty()
            .apply(Action::new(1, 1).unwrap(), Symbol::X)
            .unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_full(&board));
    }
}
