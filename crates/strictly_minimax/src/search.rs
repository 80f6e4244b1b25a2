//! Exhaustive minimax search.
//!
//! The search walks the full game tree depth-first. Tic-tac-toe has at most
//! nine plies and a few hundred thousand nodes, so nothing is cached between
//! calls and every answer is a pure function of the board.

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::moves::legal_actions;
use crate::rules;
use crate::types::{Action, Symbol};

/// A two-player, zero-sum game tree the search can walk.
pub trait GameTree: Sized {
    /// Move type.
    type Action: Copy;

    /// Legal moves in the order used for tie-breaking.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// State reached by playing `action` for the side to move.
    fn apply_action(&self, action: Self::Action) -> EngineResult<Self>;

    /// True when no further move is possible.
    fn is_terminal(&self) -> bool;

    /// Value of a terminal state from the maximizer's point of view.
    fn utility(&self) -> EngineResult<i8>;

    /// True when the side to move maximizes utility.
    fn maximizing(&self) -> bool;
}

impl GameTree for Board {
    type Action = Action;

    fn legal_actions(&self) -> Vec<Action> {
        legal_actions(self)
    }

    fn apply_action(&self, action: Action) -> EngineResult<Self> {
        self.apply(action, self.side_to_move())
    }

    fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    fn utility(&self) -> EngineResult<i8> {
        rules::utility(self)
    }

    fn maximizing(&self) -> bool {
        self.side_to_move() == Symbol::X
    }
}

/// Minimax value of a state and the move attaining it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation<A> {
    /// Utility reached under optimal play from both sides.
    pub value: i8,
    /// First move, in generation order, that reaches `value`. `None` at terminal states.
    pub action: Option<A>,
}

/// Evaluates `state` under optimal play.
///
/// Terminal states return their utility with no move. Otherwise every legal
/// move is evaluated and the first one reaching the extremal value wins.
pub fn minimax<G: GameTree>(state: &G) -> EngineResult<Evaluation<G::Action>> {
    if state.is_terminal() {
        return Ok(Evaluation {
            value: state.utility()?,
            action: None,
        });
    }

    let maximizing = state.maximizing();
    let mut best: Option<(i8, G::Action)> = None;

    for action in state.legal_actions() {
        let value = minimax(&state.apply_action(action)?)?.value;
        let improves = match best {
            None => true,
            Some((current, _)) if maximizing => value > current,
            Some((current, _)) => value < current,
        };
        if improves {
            best = Some((value, action));
        }
    }

    // A non-terminal state without moves is malformed.
    let (value, action) = best.ok_or(EngineError::InvalidState)?;
    Ok(Evaluation {
        value,
        action: Some(action),
    })
}

/// Returns the optimal move for the side to move.
///
/// Fails with [`EngineError::InvalidState`] on a terminal board.
pub fn best_move(board: &Board) -> EngineResult<Action> {
    if rules::is_terminal(board) {
        return Err(EngineError::InvalidState);
    }
    minimax(board)?.action.ok_or(EngineError::InvalidState)
}
