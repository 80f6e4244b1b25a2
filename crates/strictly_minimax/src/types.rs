//! Core domain types for tic-tac-toe.

use crate::error::{EngineError, EngineResult};
use crate::wire::{WireAction, WireResult};
use serde::{Deserialize, Serialize};

/// Player symbol. Doubles as the winner designation of a finished game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Symbol {
    /// Returns the opponent symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Returns the cell value this symbol places.
    pub fn mark(self) -> Cell {
        match self {
            Symbol::X => Cell::MarkX,
            Symbol::O => Cell::MarkO,
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by X.
    MarkX,
    /// Marked by O.
    MarkO,
}

impl Cell {
    /// Returns the symbol occupying this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::MarkX => Some(Symbol::X),
            Cell::MarkO => Some(Symbol::O),
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Symbol>> for Cell {
    fn from(symbol: Option<Symbol>) -> Self {
        symbol.map_or(Cell::Empty, Symbol::mark)
    }
}

/// A (row, column) coordinate naming the cell to mark.
///
/// Both coordinates are always within `0..=2`; construction through
/// [`Action::new`] or deserialization rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "WireAction", into = "WireAction")]
pub struct Action {
    row: usize,
    column: usize,
}

impl Action {
    /// All nine cells in row-major order.
    pub const ALL: [Action; 9] = [
        Action::at(0),
        Action::at(1),
        Action::at(2),
        Action::at(3),
        Action::at(4),
        Action::at(5),
        Action::at(6),
        Action::at(7),
        Action::at(8),
    ];

    const fn at(index: usize) -> Self {
        Self {
            row: index / 3,
            column: index % 3,
        }
    }

    /// Creates an action, failing with [`EngineError::OutOfRange`] off the board.
    pub fn new(row: usize, column: usize) -> EngineResult<Self> {
        if row > 2 || column > 2 {
            return Err(EngineError::OutOfRange { row, column });
        }
        Ok(Self { row, column })
    }

    /// Creates an action from a row-major index (0-8).
    pub fn from_index(index: usize) -> EngineResult<Self> {
        Self::ALL.get(index).copied().ok_or(EngineError::OutOfRange {
            row: index / 3,
            column: index % 3,
        })
    }

    /// Row coordinate.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column coordinate.
    pub fn column(self) -> usize {
        self.column
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.column
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Status of a board or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<WireResult>", into = "Option<WireResult>")]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    #[default]
    InProgress,
    /// A symbol completed a line.
    Won(Symbol),
    /// The board filled up without a winner.
    Drawn,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            Outcome::Won(symbol) => Some(symbol),
            Outcome::InProgress | Outcome::Drawn => None,
        }
    }

    /// Returns true once the game can no longer change.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(symbol) => write!(f, "Player {} wins", symbol),
            Outcome::Drawn => write!(f, "Draw"),
        }
    }
}
