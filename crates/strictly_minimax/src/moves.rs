//! Legal move generation.

use crate::board::Board;
use crate::types::Action;

/// Returns every empty cell in row-major order.
///
/// The order is part of the contract: search breaks ties by it.
pub fn legal_actions(board: &Board) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.cell(*action).is_empty())
        .collect()
}
