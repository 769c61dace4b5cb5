//! Scoring, terminal detection and turn advancement

use crate::board::{Grid, Side, TOTAL_CELLS};

use super::flip::has_legal_move;

/// Disc counts per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub white: u32,
    pub black: u32,
}

impl Score {
    #[inline]
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    /// Discs on the board
    #[inline]
    pub fn total(&self) -> u32 {
        self.white + self.black
    }

    /// Empty squares remaining
    #[inline]
    pub fn empty(&self) -> u32 {
        TOTAL_CELLS as u32 - self.total()
    }
}

/// Final outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Tie,
}

impl GameResult {
    /// Strictly more discs wins; equal counts tie
    pub fn from_score(score: Score) -> Self {
        use std::cmp::Ordering;
        match score.white.cmp(&score.black) {
            Ordering::Greater => GameResult::WhiteWins,
            Ordering::Less => GameResult::BlackWins,
            Ordering::Equal => GameResult::Tie,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::WhiteWins => Some(Side::White),
            GameResult::BlackWins => Some(Side::Black),
            GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::WhiteWins => write!(f, "White Wins!"),
            GameResult::BlackWins => write!(f, "Black Wins!"),
            GameResult::Tie => write!(f, "It's a Tie!"),
        }
    }
}

/// Count White and Black discs
pub fn score<G: Grid>(board: &G) -> Score {
    Score {
        white: board.count(Side::White),
        black: board.count(Side::Black),
    }
}

/// Board-level end of game: one side wiped out, or no empty squares left.
///
/// A position where neither side can move but empty squares remain is
/// not detected here; that is the double-pass rule in [`advance_turn`].
pub fn is_terminal<G: Grid>(board: &G) -> bool {
    let s = score(board);
    s.white == 0 || s.black == 0 || s.total() == TOTAL_CELLS as u32
}

/// State after a turn is handed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub next_side: Side,
    pub score: Score,
    /// `Some` when the game has ended
    pub result: Option<GameResult>,
}

impl TurnOutcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }
}

/// Hand the move to the other side after `prev_side` played or passed.
///
/// The game ends when the board is terminal, or when `prev_side` passed
/// (`passed == true`) and the new mover has no legal move either.
pub fn advance_turn<G: Grid>(board: &G, prev_side: Side, passed: bool) -> TurnOutcome {
    let next_side = prev_side.opponent();
    let score = score(board);

    let ended = is_terminal(board) || (passed && !has_legal_move(board, next_side));

    TurnOutcome {
        next_side,
        score,
        result: ended.then(|| GameResult::from_score(score)),
    }
}
