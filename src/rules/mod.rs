//! Othello rules
//!
//! This module implements the rule set:
//! - Move legality and flipping (bracketing opponent runs)
//! - Scoring and terminal detection
//! - Turn hand-over including the double-pass ending
//!
//! Every function takes the board explicitly and is generic over
//! [`Grid`](crate::board::Grid).

pub mod flip;
pub mod outcome;

// Re-exports for convenient access
pub use flip::{apply_move, compute_flips, has_legal_move, legal_moves, try_apply, Move, DIRECTIONS};
pub use outcome::{advance_turn, is_terminal, score, GameResult, Score, TurnOutcome};
