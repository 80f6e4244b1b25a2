//! The 3x3 board value.

use crate::error::{EngineError, EngineResult};
use crate::types::{Action, Cell, Symbol};
use crate::wire::WireBoard;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: [`Board::apply`] returns a new board and leaves
/// the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "WireBoard", into = "WireBoard")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

/// Returns a fresh board with every cell empty.
pub fn empty_board() -> Board {
    Board::empty()
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from cells in row-major order.
    ///
    /// No reachability check is made; malformed boards are accepted so that
    /// callers can inspect them.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Creates a board from three rows.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (index, cell) in rows.iter().flatten().enumerate() {
            cells[index] = *cell;
        }
        Self { cells }
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        [0, 1, 2].map(|row| [0, 1, 2].map(|column| self.cells[row * 3 + column]))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Looks up a cell by coordinates.
    pub fn cell_at(&self, row: usize, column: usize) -> EngineResult<Cell> {
        Action::new(row, column).map(|action| self.cell(action))
    }

    /// Looks up the cell an action targets.
    pub fn cell(&self, action: Action) -> Cell {
        self.cells[action.index()]
    }

    /// Returns a new board with `mark` placed at `action`.
    ///
    /// Fails with [`EngineError::CellOccupied`] if the cell is taken.
    pub fn apply(&self, action: Action, mark: Symbol) -> EngineResult<Board> {
        if !self.cell(action).is_empty() {
            return Err(EngineError::CellOccupied(action));
        }
        let mut next = *self;
        next.cells[action.index()] = mark.mark();
        Ok(next)
    }

    /// Number of cells marked by `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        let mark = symbol.mark();
        self.cells.iter().filter(|cell| **cell == mark).count()
    }

    /// Number of marked cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Symbol whose turn it is, derived from the mark counts.
    ///
    /// X moves whenever it has not placed more marks than O.
    pub fn side_to_move(&self) -> Symbol {
        if self.count(Symbol::X) <= self.count(Symbol::O) {
            Symbol::X
        } else {
            Symbol::O
        }
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid, numbering empty cells 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for column in 0..3 {
                let index = row * 3 + column;
                match self.cells[index].symbol() {
                    Some(symbol) => write!(f, "{}", symbol)?,
                    None => write!(f, "{}", index + 1)?,
                }
                if column < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing the `X.O/.X./...` board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid board notation: {}", reason)]
pub struct ParseBoardError {
    reason: String,
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses three `/`-separated rows of `X`, `O` and `.`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 3 {
            return Err(ParseBoardError {
                reason: format!("expected 3 rows, found {}", rows.len()),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (row, text) in rows.iter().enumerate() {
            let marks: Vec<char> = text.chars().collect();
            if marks.len() != 3 {
                return Err(ParseBoardError {
                    reason: format!("row {} has {} cells", row, marks.len()),
                });
            }
            for (column, mark) in marks.into_iter().enumerate() {
                cells[row * 3 + column] = match mark {
                    'X' | 'x' => Cell::MarkX,
                    'O' | 'o' => Cell::MarkO,
                    '.' | '_' => Cell::Empty,
                    other => {
                        return Err(ParseBoardError {
                            reason: format!("unexpected mark {:?}", other),
                        });
                    }
                };
            }
        }
        Ok(Self { cells })
    }
}
