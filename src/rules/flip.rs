//! Move legality and disc flipping
//!
//! A move is legal when, in at least one of the eight compass directions,
//! the placed disc and an existing disc of the mover bracket a contiguous
//! run of opponent discs. Every bracketed run is flipped.

use crate::board::{Cell, Grid, Pos, Side};
use crate::error::MoveError;

/// Ray directions as (dx, dy): N, NE, E, SE, S, SW, W, NW
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// A legal placement and the opponent discs it turns over.
///
/// Only meaningful for the board and side it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    /// Flipped squares, grouped by direction in `DIRECTIONS` order,
    /// each run listed outward from `pos`
    pub flips: Vec<Pos>,
}

impl Move {
    /// Discs gained by the mover: the placed disc plus every flip
    #[inline]
    pub fn gain(&self) -> u32 {
        self.flips.len() as u32 + 1
    }
}

/// Collect the opponent run in one direction if it is closed by an own disc.
/// Leaves `flips` untouched when the ray is open.
fn collect_ray<G: Grid>(board: &G, side: Side, pos: Pos, (dx, dy): (i32, i32), flips: &mut Vec<Pos>) {
    let own = side.cell();
    let opponent = side.opponent().cell();
    let start = flips.len();

    let mut cursor = pos.offset(dx, dy);
    while let Some(p) = cursor {
        let cell = board.cell(p);
        if cell == opponent {
            flips.push(p);
            cursor = p.offset(dx, dy);
        } else if cell == own {
            // Anchor reached; an empty run (own disc adjacent) adds nothing
            return;
        } else {
            break;
        }
    }

    // Ran off the board or hit an empty square
    flips.truncate(start);
}

/// Discs that `side` would flip by playing at `pos`.
///
/// Returns `None` when the square is occupied or brackets nothing.
/// Never mutates the board.
pub fn compute_flips<G: Grid>(board: &G, side: Side, pos: Pos) -> Option<Vec<Pos>> {
    if board.cell(pos) != Cell::Empty {
        return None;
    }

    let mut flips = Vec::new();
    for &dir in &DIRECTIONS {
        collect_ray(board, side, pos, dir, &mut flips);
    }

    if flips.is_empty() {
        None
    } else {
        Some(flips)
    }
}

/// Every legal move for `side`, in x-outer, y-inner scan order.
pub fn legal_moves<G: Grid>(board: &G, side: Side) -> Vec<Move> {
    Pos::all()
        .filter_map(|pos| compute_flips(board, side, pos).map(|flips| Move { pos, flips }))
        .collect()
}

/// Whether `side` has at least one legal move
pub fn has_legal_move<G: Grid>(board: &G, side: Side) -> bool {
    Pos::all().any(|pos| compute_flips(board, side, pos).is_some())
}

/// Place the mover's disc and flip every square in the move's flip list.
///
/// `mv` must come from [`legal_moves`] or [`compute_flips`] on this exact
/// board; use [`try_apply`] for unvalidated input.
pub fn apply_move<G: Grid>(board: &mut G, side: Side, mv: &Move) {
    let cell = side.cell();
    board.set_cell(mv.pos, cell);
    for &p in &mv.flips {
        board.set_cell(p, cell);
    }
}

/// Validate the coordinate against the current board, then apply it.
///
/// Legality is recomputed here rather than trusting an earlier `Move`.
/// On error the board is unchanged.
pub fn try_apply<G: Grid>(board: &mut G, side: Side, x: i32, y: i32) -> Result<Move, MoveError> {
    let pos = Pos::try_new(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
    if board.cell(pos) != Cell::Empty {
        return Err(MoveError::Occupied(pos));
    }
    let flips = compute_flips(board, side, pos).ok_or(MoveError::NoBracket(pos))?;

    let mv = Move { pos, flips };
    apply_move(board, side, &mv);
    Ok(mv)
}
