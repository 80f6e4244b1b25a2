//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Action, Symbol};

/// Row-major indices of the eight lines, checked in this order.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the symbol holding three in a row, if any.
///
/// Lines are scanned rows first, then columns, then diagonals, and the first
/// complete line decides. Only malformed boards can hold two.
pub fn winner(board: &Board) -> Option<Symbol> {
    LINES.iter().find_map(|&[a, b, c]| {
        let first = board.cell(Action::ALL[a]);
        let complete = first == board.cell(Action::ALL[b]) && first == board.cell(Action::ALL[c]);
        if complete { first.symbol() } else { None }
    })
}
