//! Othello (Reversi) rules and AI engine
//!
//! An 8x8 Othello implementation:
//! - Legal-move detection by bracketing opponent runs in eight directions
//! - Move application with disc flipping
//! - Turn hand-over, passes and game-over detection
//! - Fixed-depth minimax for the automated opponent
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Cell/side/position types and two board representations
//! - [`rules`]: Legality, flipping, scoring and turn advancement
//! - [`eval`]: Material evaluation
//! - [`search`]: Minimax and greedy move selection
//! - [`engine`]: AI engine wrapping the search for a live board
//! - [`game`]: Turn state machine used by front ends
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use othello::{AIEngine, Game, Side};
//!
//! let mut game = Game::new(Side::Black);
//! let mut engine = AIEngine::with_config(2, othello::Strategy::Minimax);
//!
//! // Black plays a human move, White answers with the engine
//! game.play(2, 3).unwrap();
//! if let Some(mv) = engine.get_move(game.board(), Side::White) {
//!     game.play(mv.pos.x as i32, mv.pos.y as i32).unwrap();
//! }
//! assert_eq!(game.side_to_move(), Some(Side::Black));
//! ```
//!
//! Every rules and search function takes the board explicitly; there is no
//! global game state.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{is_on_board, Bitboard, Board, Cell, Grid, Pos, Side, BOARD_SIZE};
pub use config::AppConfig;
pub use engine::{AIEngine, MoveResult, Strategy};
pub use error::{ConfigError, MoveError};
pub use game::{new_game, Game, Phase};
pub use rules::{GameResult, Move, Score};
