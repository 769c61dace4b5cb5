//! AI engine used by the automated player
//!
//! The engine copies the live board into a compact [`Bitboard`] scratch
//! representation, runs the configured strategy on it and reports the
//! chosen move together with search statistics. The returned move is then
//! played on the live board by the caller, which revalidates it.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Side};
//!
//! let mut engine = AIEngine::with_config(3, othello::Strategy::Minimax);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Side::White);
//! println!("Best move: {:?}", result.best_move.map(|m| m.pos));
//! println!("Nodes: {}", result.nodes);
//! ```

use std::time::Instant;

use crate::board::{Bitboard, Board, Side};
use crate::eval::{flip_gain, heuristic};
use crate::rules::Move;
use crate::search::{greedy_move, Searcher};

/// How the engine picks its move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Fixed-depth minimax on disc difference
    #[default]
    Minimax,
    /// Take the move flipping the most discs
    Greedy,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when the side must pass
    pub best_move: Option<Move>,
    /// Evaluation of the chosen line from the mover's perspective
    pub score: i32,
    pub strategy: Strategy,
    /// Depth limit used (1 for greedy)
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Main AI engine.
///
/// # Configuration
///
/// - Search depth in plies (the difficulty "level")
/// - Strategy: minimax or greedy
pub struct AIEngine {
    searcher: Searcher,
    strategy: Strategy,
}

impl AIEngine {
    /// Engine with one-ply minimax
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(1, Strategy::Minimax)
    }

    /// Create an AI engine with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `depth` - Search depth in plies, clamped to at least 1
    /// * `strategy` - Move selection strategy
    #[must_use]
    pub fn with_config(depth: u8, strategy: Strategy) -> Self {
        Self {
            searcher: Searcher::new(depth),
            strategy,
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` if `side` has no legal move.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let start = Instant::now();
        let scratch = Bitboard::from(board);

        let result = match self.strategy {
            Strategy::Minimax => {
                let found = self.searcher.search(&scratch, side);
                MoveResult {
                    best_move: found.best_move,
                    score: found.score,
                    strategy: Strategy::Minimax,
                    depth: found.depth,
                    time_ms: 0,
                    nodes: found.nodes,
                }
            }
            Strategy::Greedy => {
                let best_move = greedy_move(&scratch, side);
                let base = heuristic(&scratch, side);
                MoveResult {
                    score: best_move.as_ref().map_or(base, |mv| base + flip_gain(mv)),
                    best_move,
                    strategy: Strategy::Greedy,
                    depth: 1,
                    time_ms: 0,
                    nodes: 0,
                }
            }
        };

        let result = MoveResult {
            time_ms: start.elapsed().as_millis() as u64,
            ..result
        };

        match &result.best_move {
            Some(mv) => tracing::debug!(
                side = side.name(),
                pos = %mv.pos,
                flips = mv.flips.len(),
                score = result.score,
                nodes = result.nodes,
                time_ms = result.time_ms,
                "engine selected move"
            ),
            None => tracing::debug!(side = side.name(), "engine has no legal move"),
        }

        result
    }

    /// Set the search depth (the difficulty level).
    pub fn set_depth(&mut self, depth: u8) {
        self.searcher = Searcher::new(depth);
    }

    #[must_use]
    pub fn depth(&self) -> u8 {
        self.searcher.depth_limit()
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::try_apply;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.depth(), 1);
        assert_eq!(engine.strategy(), Strategy::Minimax);
    }

    #[test]
    fn test_engine_with_config() {
        let mut engine = AIEngine::with_config(4, Strategy::Greedy);
        assert_eq!(engine.depth(), 4);
        engine.set_depth(0);
        assert_eq!(engine.depth(), 1);
    }

    #[test]
    fn test_engine_move_is_playable() {
        let mut board = Board::new();
        let mut engine = AIEngine::with_config(3, Strategy::Minimax);
        let mv = engine.get_move(&board, Side::White).unwrap();
        let played = try_apply(&mut board, Side::White, mv.pos.x as i32, mv.pos.y as i32).unwrap();
        assert_eq!(played, mv);
    }

    #[test]
    fn test_engine_strategies_agree_at_depth_one() {
        let board = Board::from_rows([
            "........",
            "........",
            ".WBBBB..",
            "........",
            "...B....",
            "...W....",
            "........",
            "........",
        ]);
        let mut minimax = AIEngine::with_config(1, Strategy::Minimax);
        let mut greedy = AIEngine::with_config(1, Strategy::Greedy);
        let a = minimax.get_move_with_stats(&board, Side::White);
        let b = greedy.get_move_with_stats(&board, Side::White);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
        assert_eq!(a.best_move.map(|m| m.pos), Some(Pos::new(6, 2)));
    }

    #[test]
    fn test_engine_no_move() {
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&Board::empty(), Side::Black);
        assert!(result.best_move.is_none());
    }
}
