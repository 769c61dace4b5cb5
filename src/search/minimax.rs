//! Fixed-depth minimax search
//!
//! This module implements the move selection used by the automated player.
//! It is a plain exhaustive minimax over scratch copies of the board:
//! no pruning, no move ordering and no transposition cache, so its cost
//! grows exponentially with the depth limit.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Side};
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new(2);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Side::Black);
//! if let Some(best) = result.best_move {
//!     println!("Best move: {}", best.pos);
//! }
//! ```

use crate::board::{Grid, Side};
use crate::eval::heuristic;
use crate::rules::{apply_move, has_legal_move, is_terminal, legal_moves, Move};

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions scored by the heuristic
    pub leaves: u64,
    /// Forced passes followed inside the tree
    pub passes: u64,
    /// Nodes cut short because neither side could move
    pub double_pass_cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move must pass
    pub best_move: Option<Move>,
    /// Minimax value of the best move from the mover's perspective
    pub score: i32,
    /// Depth limit the search ran with
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Stateless-between-calls minimax searcher.
///
/// Only counters live here; every call works on private board copies.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth_limit: u8,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher that looks `depth_limit` plies ahead (at least 1).
    pub fn new(depth_limit: u8) -> Self {
        Self {
            depth_limit: depth_limit.max(1),
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    pub fn depth_limit(&self) -> u8 {
        self.depth_limit
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the move with the strictly greatest minimax value for `side`.
    ///
    /// Moves are tried in [`legal_moves`] scan order and the first one seen
    /// wins ties.
    pub fn search<G: Grid>(&mut self, board: &G, side: Side) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for mv in legal_moves(board, side) {
            let mut child = board.clone();
            apply_move(&mut child, side, &mv);

            // The root move is ply 0; its reply starts at ply 1
            let value = self.minimax_value(&child, side, side.opponent(), 1);

            if value > best_score {
                best_score = value;
                best_move = Some(mv);
            }
        }

        SearchResult {
            score: if best_move.is_some() { best_score } else { heuristic(board, side) },
            best_move,
            depth: self.depth_limit,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Best move for `side`, or `None` when it has no legal move.
    pub fn select_move<G: Grid>(&mut self, board: &G, side: Side) -> Option<Move> {
        self.search(board, side).best_move
    }

    /// Minimax value of `board` from `root`'s point of view with
    /// `to_move` on turn and `ply` plies already played.
    ///
    /// The root side maximizes, its opponent minimizes. A forced pass costs
    /// a ply without changing the board; when neither side can move the
    /// position is scored immediately.
    pub fn minimax_value<G: Grid>(&mut self, board: &G, root: Side, to_move: Side, ply: u8) -> i32 {
        self.nodes += 1;

        if ply >= self.depth_limit || is_terminal(board) {
            self.stats.leaves += 1;
            return heuristic(board, root);
        }

        let moves = legal_moves(board, to_move);
        if moves.is_empty() {
            if !has_legal_move(board, to_move.opponent()) {
                self.stats.double_pass_cutoffs += 1;
                self.stats.leaves += 1;
                return heuristic(board, root);
            }
            self.stats.passes += 1;
            return self.minimax_value(board, root, to_move.opponent(), ply + 1);
        }

        let maximizing = to_move == root;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in &moves {
            let mut child = board.clone();
            apply_move(&mut child, to_move, mv);
            let value = self.minimax_value(&child, root, to_move.opponent(), ply + 1);
            best = if maximizing { best.max(value) } else { best.min(value) };
        }

        best
    }
}

/// Best move for `side` looking `depth_limit` plies ahead.
pub fn select_move<G: Grid>(board: &G, side: Side, depth_limit: u8) -> Option<Move> {
    Searcher::new(depth_limit).select_move(board, side)
}
