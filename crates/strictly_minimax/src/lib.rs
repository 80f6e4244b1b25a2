//! Strictly Minimax - a pure tic-tac-toe engine
//!
//! Board values, legal move generation, outcome detection, exhaustive
//! minimax search and the per-game session state machine.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 grid value
//! - **Moves / Rules**: legal actions, winner, terminal and utility
//! - **Search**: optimal move for the side to move
//! - **Session**: sequences human and automated turns, freezes when over
//! - **Wire**: transport shapes for the hosting layer
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, GameSession, Outcome, Symbol};
//!
//! let mut session = GameSession::new(Some(Symbol::O));
//! session.apply_turn(Some(Action::new(1, 1)?))?;
//! session.apply_turn(None)?;
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! # Ok::<(), strictly_minimax::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod moves;
mod search;
mod session;
mod types;
mod wire;

pub mod invariants;
pub mod rules;

pub use board::{Board, ParseBoardError, empty_board};
pub use error::{EngineError, EngineResult};
pub use moves::legal_actions;
pub use rules::{is_full, is_terminal, outcome, utility, winner};
pub use search::{Evaluation, GameTree, best_move, minimax};
pub use session::{GameSession, Turn};
pub use types::{Action, Cell, Outcome, Symbol};
pub use wire::{GameView, WireAction, WireBoard, WireResult};
