//! Material evaluation for Othello positions
//!
//! The score is the plain disc difference. There is no positional
//! weighting: corners, edges and mobility count the same as any disc.

use crate::board::{Grid, Side};
use crate::rules::Move;

/// Evaluate the board from the perspective of `side`.
///
/// Returns `side`'s disc count minus the opponent's:
/// - Positive values indicate advantage for `side`
/// - Negative values indicate disadvantage for `side`
#[must_use]
pub fn heuristic<G: Grid>(board: &G, side: Side) -> i32 {
    board.count(side) as i32 - board.count(side.opponent()) as i32
}

/// Change in the material score a move produces for its mover.
///
/// The mover gains the placed disc plus every flip, and the opponent
/// loses every flip, so the difference moves by `1 + 2 * flips`.
#[inline]
#[must_use]
pub fn flip_gain(mv: &Move) -> i32 {
    1 + 2 * mv.flips.len() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};
    use crate::rules::{apply_move, legal_moves};

    #[test]
    fn test_heuristic_symmetric() {
        let board = Board::from_rows([
            "WWW.....",
            "B.......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert_eq!(heuristic(&board, Side::White), 2);
        assert_eq!(heuristic(&board, Side::Black), -2);
    }

    #[test]
    fn test_heuristic_starting_board_even() {
        assert_eq!(heuristic(&Board::new(), Side::White), 0);
    }

    #[test]
    fn test_flip_gain_matches_heuristic_delta() {
        let board = Board::new();
        for mv in legal_moves(&board, Side::Black) {
            let mut next = board;
            apply_move(&mut next, Side::Black, &mv);
            assert_eq!(
                heuristic(&next, Side::Black) - heuristic(&board, Side::Black),
                flip_gain(&mv)
            );
        }
    }

    #[test]
    fn test_heuristic_single_side() {
        let mut board = Board::empty();
        board.place(Pos::new(1, 1), Side::Black);
        assert_eq!(heuristic(&board, Side::Black), 1);
        assert_eq!(heuristic(&board, Side::White), -1);
    }
}
