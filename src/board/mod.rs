//! Board representation for Othello

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Contents of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Cell value a disc of this side occupies
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Side::White => Cell::White,
            Side::Black => Cell::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl Cell {
    /// Owner of the disc in this cell, if any
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::White => Some(Side::White),
            Cell::Black => Some(Side::Black),
            Cell::Empty => None,
        }
    }
}

/// True iff (x, y) lies inside the 8x8 grid
#[inline]
pub fn is_on_board(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}

/// Square on the board, `x` is the file and `y` the rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Checked constructor from signed coordinates
    #[inline]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        if is_on_board(x, y) {
            Some(Self { x: x as u8, y: y as u8 })
        } else {
            None
        }
    }

    /// Step one square in direction (dx, dy), `None` when it leaves the board
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::try_new(self.x as i32 + dx, self.y as i32 + dy)
    }

    /// Index in x-major scan order
    #[inline]
    pub fn to_index(self) -> usize {
        self.x as usize * BOARD_SIZE + self.y as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx / BOARD_SIZE) as u8,
            y: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Every square in x-outer, y-inner order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cell storage shared by every board representation.
///
/// Rules and search are written once against this trait, so the live
/// [`Board`] and the compact [`Bitboard`] used for search scratch copies
/// run the exact same legality and flip code.
pub trait Grid: Clone {
    /// Contents of the square at `pos`
    fn cell(&self, pos: Pos) -> Cell;

    /// Overwrite the square at `pos`
    fn set_cell(&mut self, pos: Pos, cell: Cell);

    /// Number of discs owned by `side`
    fn count(&self, side: Side) -> u32 {
        Pos::all().filter(|&p| self.cell(p) == side.cell()).count() as u32
    }
}
