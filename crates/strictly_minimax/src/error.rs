//! Engine error kinds.

use crate::types::Action;

/// Failure of an engine operation.
///
/// Every failure leaves its input untouched. Callers translate each kind
/// into whatever status their transport uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// A coordinate lies outside `0..=2`.
    #[display("Coordinate ({}, {}) is outside the board", row, column)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// Tried to mark a cell that already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Action),

    /// The action is not among the legal actions of the board.
    #[display("Invalid move: {}", _0)]
    IllegalMove(Action),

    /// A human turn was submitted without coordinates.
    #[display("You must provide your move's coordinates (x, y)")]
    MissingMove,

    /// The session already has a winner or is drawn.
    #[display("This game is over")]
    GameOver,

    /// Search was asked for a move on a terminal board.
    #[display("No move exists on a terminal board")]
    InvalidState,
}

impl std::error::Error for EngineError {}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
