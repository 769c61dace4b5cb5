//! Turn state machine for a single game
//!
//! `Game` is what a front end holds between moves: the live board, the side
//! to move and whether the game has ended. All rule decisions are delegated
//! to [`crate::rules`]; the game never trusts a stale `Move` and
//! recomputes legality on every play.
//!
//! ```text
//! AwaitingMove(side) --legal move--> AwaitingMove(other)
//! AwaitingMove(side) --pass-------->  AwaitingMove(other)
//!                    --board terminal or double pass--> GameOver(result)
//! ```

use crate::board::{Board, Pos, Side};
use crate::error::MoveError;
use crate::rules::{advance_turn, legal_moves, score, try_apply, GameResult, Move, Score};

/// Standard starting board
pub fn new_game() -> Board {
    Board::new()
}

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Side),
    /// Absorbing; `None` when the game was abandoned before it finished
    GameOver(Option<GameResult>),
}

/// Live game: board, side to move and phase
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    phase: Phase,
    last_move: Option<Pos>,
    moves_played: u32,
}

impl Game {
    /// Fresh game with `first` to move
    pub fn new(first: Side) -> Self {
        tracing::info!(first = first.name(), "new game");
        Self {
            board: new_game(),
            phase: Phase::AwaitingMove(first),
            last_move: None,
            moves_played: 0,
        }
    }

    /// Resume from an arbitrary position
    pub fn from_position(board: Board, to_move: Side) -> Self {
        Self {
            board,
            phase: Phase::AwaitingMove(to_move),
            last_move: None,
            moves_played: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side to move, `None` once the game is over
    pub fn side_to_move(&self) -> Option<Side> {
        match self.phase {
            Phase::AwaitingMove(side) => Some(side),
            Phase::GameOver(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Final result, if the game finished normally
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => result,
            Phase::AwaitingMove(_) => None,
        }
    }

    pub fn score(&self) -> Score {
        score(&self.board)
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Legal moves for the side to move (empty once the game is over)
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.phase {
            Phase::AwaitingMove(side) => legal_moves(&self.board, side),
            Phase::GameOver(_) => Vec::new(),
        }
    }

    /// Whether the side to move is forced to pass
    pub fn must_pass(&self) -> bool {
        !self.is_over() && self.legal_moves().is_empty()
    }

    /// Play the side to move at (x, y).
    ///
    /// The board is left untouched on error.
    pub fn play(&mut self, x: i32, y: i32) -> Result<Move, MoveError> {
        let Phase::AwaitingMove(side) = self.phase else {
            return Err(MoveError::GameOver);
        };

        let mv = try_apply(&mut self.board, side, x, y)?;
        self.last_move = Some(mv.pos);
        self.moves_played += 1;
        tracing::debug!(side = side.name(), pos = %mv.pos, flips = mv.flips.len(), "move played");

        self.hand_over(side, false);
        Ok(mv)
    }

    /// Forfeit the turn; only allowed when no legal move exists.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        let Phase::AwaitingMove(side) = self.phase else {
            return Err(MoveError::GameOver);
        };
        if !self.legal_moves().is_empty() {
            return Err(MoveError::PassNotAllowed);
        }

        tracing::info!(side = side.name(), "no legal move, passing");
        self.hand_over(side, true);
        Ok(())
    }

    /// End the game early without a result
    pub fn abandon(&mut self) {
        if !self.is_over() {
            tracing::info!("game abandoned");
            self.phase = Phase::GameOver(None);
        }
    }

    fn hand_over(&mut self, prev: Side, passed: bool) {
        let outcome = advance_turn(&self.board, prev, passed);
        self.phase = match outcome.result {
            Some(result) => {
                tracing::info!(
                    white = outcome.score.white,
                    black = outcome.score.black,
                    %result,
                    "game over"
                );
                Phase::GameOver(Some(result))
            }
            None => Phase::AwaitingMove(outcome.next_side),
        };
    }
}
