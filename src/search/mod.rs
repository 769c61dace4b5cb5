//! Search module for the automated player
//!
//! Contains:
//! - Fixed-depth minimax over scratch board copies
//! - One-ply greedy (max-flip) move choice

pub mod greedy;
pub mod minimax;

pub use greedy::greedy_move;
pub use minimax::{select_move, SearchResult, SearchStats, Searcher};
