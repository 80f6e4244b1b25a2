//! Transport shapes shared with the hosting layer.
//!
//! A board travels as a 3x3 array of `"X"`, `"O"` or `null`. An outcome
//! travels as `"X"`, `"O"`, `"draw"`, or `null` while the game is running.
//! Actions travel as `{"x": row, "y": column}`.

use crate::board::Board;
use crate::error::EngineError;
use crate::session::GameSession;
use crate::types::{Action, Cell, Outcome, Symbol};
use serde::{Deserialize, Serialize};

/// Transport form of a board.
pub type WireBoard = [[Option<Symbol>; 3]; 3];

impl From<Board> for WireBoard {
    fn from(board: Board) -> Self {
        board.rows().map(|row| row.map(Cell::symbol))
    }
}

impl From<WireBoard> for Board {
    fn from(rows: WireBoard) -> Self {
        Board::from_rows(rows.map(|row| row.map(Cell::from)))
    }
}

/// Transport form of a finished game's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireResult {
    /// X won.
    X,
    /// O won.
    O,
    /// Nobody won.
    #[serde(rename = "draw")]
    Draw,
}

impl From<Outcome> for Option<WireResult> {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Won(Symbol::X) => Some(WireResult::X),
            Outcome::Won(Symbol::O) => Some(WireResult::O),
            Outcome::Drawn => Some(WireResult::Draw),
        }
    }
}

impl From<Option<WireResult>> for Outcome {
    fn from(result: Option<WireResult>) -> Self {
        match result {
            None => Outcome::InProgress,
            Some(WireResult::X) => Outcome::Won(Symbol::X),
            Some(WireResult::O) => Outcome::Won(Symbol::O),
            Some(WireResult::Draw) => Outcome::Drawn,
        }
    }
}

/// Transport form of an action, `x` being the row and `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireAction {
    /// Row.
    pub x: usize,
    /// Column.
    pub y: usize,
}

impl TryFrom<WireAction> for Action {
    type Error = EngineError;

    fn try_from(raw: WireAction) -> Result<Self, Self::Error> {
        Action::new(raw.x, raw.y)
    }
}

impl From<Action> for WireAction {
    fn from(action: Action) -> Self {
        Self {
            x: action.row(),
            y: action.column(),
        }
    }
}

/// Snapshot of a session as seen by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The 3x3 grid.
    pub state: Board,
    /// Result once the game is over.
    #[serde(default)]
    pub winner: Outcome,
    /// Symbol whose move is next.
    pub current_player: Symbol,
    /// Symbol played by the automated opponent, if any.
    pub ai_symbol: Option<Symbol>,
}

impl From<&GameSession> for GameView {
    fn from(session: &GameSession) -> Self {
        Self {
            state: session.board(),
            winner: session.outcome(),
            current_player: session.current_player(),
            ai_symbol: session.automated_symbol(),
        }
    }
}
