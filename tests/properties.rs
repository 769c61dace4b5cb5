//! Property tests over random legal playouts

use othello::rules::{apply_move, has_legal_move, is_terminal, legal_moves, score};
use othello::search::{greedy_move, select_move};
use othello::{Bitboard, Board, Cell, Grid, Pos, Side};
use proptest::prelude::*;

/// Play `choices` as indices into the legal move list, passing when stuck.
///
/// Returns the final board and the side to move.
fn playout(choices: &[usize]) -> (Board, Side) {
    let mut board = Board::new();
    let mut side = Side::Black;

    for &choice in choices {
        if is_terminal(&board) {
            break;
        }
        let moves = legal_moves(&board, side);
        if !moves.is_empty() {
            apply_move(&mut board, side, &moves[choice % moves.len()]);
        }
        side = side.opponent();
    }

    (board, side)
}

proptest! {
    /// Legal moves land on empty squares and flip only opponent discs
    #[test]
    fn prop_legal_moves_are_well_formed(choices in prop::collection::vec(0usize..64, 0..60)) {
        let (board, side) = playout(&choices);

        for mv in legal_moves(&board, side) {
            prop_assert_eq!(board.get(mv.pos), Cell::Empty);
            prop_assert!(!mv.flips.is_empty());
            for flip in &mv.flips {
                prop_assert_eq!(board.get(*flip), side.opponent().cell());
            }
        }
    }

    /// A move adds one disc plus its flips for the mover and removes the flips from the opponent
    #[test]
    fn prop_flip_arithmetic(choices in prop::collection::vec(0usize..64, 0..60), pick in 0usize..64) {
        let (board, side) = playout(&choices);
        let moves = legal_moves(&board, side);
        prop_assume!(!moves.is_empty());

        let mv = &moves[pick % moves.len()];
        let before = score(&board);
        let mut after_board = board;
        apply_move(&mut after_board, side, mv);
        let after = score(&after_board);

        let flips = mv.flips.len() as u32;
        prop_assert_eq!(after.of(side), before.of(side) + 1 + flips);
        prop_assert_eq!(after.of(side.opponent()), before.of(side.opponent()) - flips);
        prop_assert_eq!(after.empty(), before.empty() - 1);
    }

    /// Discs and empty squares always cover the board
    #[test]
    fn prop_score_covers_board(choices in prop::collection::vec(0usize..64, 0..80)) {
        let (board, _) = playout(&choices);
        let s = score(&board);
        prop_assert_eq!(s.total() + s.empty(), 64);
        prop_assert!(s.total() >= 4);
        prop_assert_eq!(s.total(), board.disc_count());
    }

    /// The array board and bitboard agree on every query
    #[test]
    fn prop_representations_agree(choices in prop::collection::vec(0usize..64, 0..60)) {
        let (board, side) = playout(&choices);
        let bits = Bitboard::from(&board);

        for pos in Pos::all() {
            prop_assert_eq!(board.cell(pos), bits.cell(pos));
        }
        prop_assert_eq!(board.count(Side::White), bits.count(Side::White));
        prop_assert_eq!(board.count(Side::Black), bits.count(Side::Black));

        let from_array: Vec<Pos> = legal_moves(&board, side).into_iter().map(|m| m.pos).collect();
        let from_bits: Vec<Pos> = legal_moves(&bits, side).into_iter().map(|m| m.pos).collect();
        prop_assert_eq!(from_array, from_bits);
        prop_assert_eq!(is_terminal(&board), is_terminal(&bits));
    }

    /// One ply of minimax picks the same square as the greedy rule
    #[test]
    fn prop_depth_one_matches_greedy(choices in prop::collection::vec(0usize..64, 0..50)) {
        let (board, side) = playout(&choices);
        let minimax = select_move(&board, side, 1).map(|m| m.pos);
        let greedy = greedy_move(&board, side).map(|m| m.pos);
        prop_assert_eq!(minimax, greedy);
    }

    /// Search returns a legal move exactly when one exists and leaves the board alone
    #[test]
    fn prop_search_returns_legal_move(choices in prop::collection::vec(0usize..64, 0..50), depth in 1u8..=3) {
        let (board, side) = playout(&choices);
        let snapshot = board;

        let chosen = select_move(&board, side, depth);
        prop_assert_eq!(board, snapshot);
        prop_assert_eq!(chosen.is_some(), has_legal_move(&board, side));

        if let Some(mv) = chosen {
            let legal: Vec<Pos> = legal_moves(&board, side).into_iter().map(|m| m.pos).collect();
            prop_assert!(legal.contains(&mv.pos));
        }
    }
}
