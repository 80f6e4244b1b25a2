//! Property-based tests over random legal playouts.

use proptest::prelude::*;
use strictly_minimax::{
    Action, Board, GameSession, Outcome, Symbol, best_move, empty_board, is_terminal,
    legal_actions, outcome,
};

/// Plays random legal moves from the empty board, stopping early at game end.
fn arb_reachable_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(0usize..9, 0..9).prop_map(|choices| {
        let mut board = empty_board();
        for choice in choices {
            if is_terminal(&board) {
                break;
            }
            let moves = legal_actions(&board);
            let action = moves[choice % moves.len()];
            board = board.apply(action, board.side_to_move()).unwrap();
        }
        board
    })
}

proptest! {
    #[test]
    fn prop_x_never_trails_and_never_leads_by_two(board in arb_reachable_board()) {
        let x = board.count(Symbol::X);
        let o = board.count(Symbol::O);
        prop_assert!(x == o || x == o + 1);
    }

    #[test]
    fn prop_legal_actions_are_the_empty_cells(board in arb_reachable_board()) {
        let moves = legal_actions(&board);
        prop_assert_eq!(moves.len(), 9 - board.occupied());
        prop_assert!(moves.iter().all(|a| board.cell(*a).is_empty()));
        prop_assert!(moves.windows(2).all(|w| w[0].index() < w[1].index()));
    }

    #[test]
    fn prop_apply_does_not_touch_the_original(board in arb_reachable_board()) {
        let snapshot = board;
        for action in legal_actions(&board) {
            let next = board.apply(action, board.side_to_move()).unwrap();
            let _ = outcome(&next);
            prop_assert_eq!(board, snapshot);
            prop_assert_eq!(next.occupied(), board.occupied() + 1);
        }
    }

    #[test]
    fn prop_board_json_round_trip(board in arb_reachable_board()) {
        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, board);
    }

    #[test]
    fn prop_best_move_is_legal(board in arb_reachable_board()) {
        prop_assume!(!is_terminal(&board));
        let chosen = best_move(&board).unwrap();
        prop_assert!(legal_actions(&board).contains(&chosen));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_automated_o_never_loses(choices in proptest::collection::vec(0usize..9, 5)) {
        let mut session = GameSession::new(Some(Symbol::O));
        let mut choices = choices.into_iter();
        while !session.is_terminal() {
            let submitted = if session.current_player() == Symbol::X {
                let moves = legal_actions(&session.board());
                let choice = choices.next().unwrap_or(0);
                Some(moves[choice % moves.len()])
            } else {
                None
            };
            session.apply_turn(submitted).unwrap();
        }
        prop_assert_ne!(session.outcome(), Outcome::Won(Symbol::X));
    }

    #[test]
    fn prop_failed_turn_leaves_session_unchanged(index in 0usize..9) {
        let mut session = GameSession::new(None);
        session.apply_turn(Some(Action::from_index(index).unwrap())).unwrap();
        let before = session.clone();
        let replay = session.apply_turn(Some(Action::from_index(index).unwrap()));
        prop_assert!(replay.is_err());
        prop_assert_eq!(session, before);
    }
}
