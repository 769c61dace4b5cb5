//! One-ply max-flip move choice

use crate::board::{Grid, Side};
use crate::rules::{legal_moves, Move};

/// Legal move flipping the most discs; the first in scan order wins ties.
pub fn greedy_move<G: Grid>(board: &G, side: Side) -> Option<Move> {
    let mut best: Option<Move> = None;
    for mv in legal_moves(board, side) {
        if best.as_ref().map_or(true, |b| mv.flips.len() > b.flips.len()) {
            best = Some(mv);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};

    #[test]
    fn test_greedy_first_seen_wins_ties() {
        let mv = greedy_move(&Board::new(), Side::Black).unwrap();
        assert_eq!(mv.pos, Pos::new(2, 3));
    }

    #[test]
    fn test_greedy_prefers_more_flips() {
        let board = Board::from_rows([
            "........",
            "........",
            ".WBB....",
            "........",
            "...B....",
            "...W....",
            "........",
            "........",
        ]);
        let mv = greedy_move(&board, Side::White).unwrap();
        assert_eq!(mv.pos, Pos::new(4, 2));
        assert_eq!(mv.flips, vec![Pos::new(3, 2), Pos::new(2, 2)]);
    }

    #[test]
    fn test_greedy_none_without_moves() {
        assert!(greedy_move(&Board::empty(), Side::Black).is_none());
    }
}
