//! Bitboard board representation used for search scratch copies

use super::{Board, Cell, Grid, Pos, Side};

/// Two 64-bit occupancy masks, one per side.
/// Bit `Pos::to_index()` is set when that side owns the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    white: u64,
    black: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { white: 0, black: 0 }
    }

    #[inline]
    fn mask(pos: Pos) -> u64 {
        1u64 << pos.to_index()
    }

    /// Occupancy mask for a side
    #[inline]
    pub fn stones(&self, side: Side) -> u64 {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    /// Mask of empty squares
    #[inline]
    pub fn empty_mask(&self) -> u64 {
        !(self.white | self.black)
    }

    /// Iterate over squares owned by `side`
    pub fn iter_ones(&self, side: Side) -> BitboardIter {
        BitboardIter {
            bits: self.stones(side),
        }
    }
}

impl Grid for Bitboard {
    #[inline]
    fn cell(&self, pos: Pos) -> Cell {
        let m = Self::mask(pos);
        if self.white & m != 0 {
            Cell::White
        } else if self.black & m != 0 {
            Cell::Black
        } else {
            Cell::Empty
        }
    }

    #[inline]
    fn set_cell(&mut self, pos: Pos, cell: Cell) {
        let m = Self::mask(pos);
        self.white &= !m;
        self.black &= !m;
        match cell {
            Cell::White => self.white |= m,
            Cell::Black => self.black |= m,
            Cell::Empty => {}
        }
    }

    /// Popcount instead of a square scan
    #[inline]
    fn count(&self, side: Side) -> u32 {
        self.stones(side).count_ones()
    }
}

impl From<&Board> for Bitboard {
    fn from(board: &Board) -> Self {
        let mut bb = Bitboard::new();
        for pos in Pos::all() {
            bb.set_cell(pos, board.get(pos));
        }
        bb
    }
}

impl From<&Bitboard> for Board {
    fn from(bb: &Bitboard) -> Self {
        let mut board = Board::empty();
        for pos in Pos::all() {
            board.set_cell(pos, bb.cell(pos));
        }
        board
    }
}

/// Iterator over set bits of one side's mask
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }
}
