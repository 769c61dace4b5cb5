//! Live game board

use super::{Cell, Grid, Pos, Side, BOARD_SIZE};

/// 8x8 grid of cells, indexed `[x][y]`.
///
/// `Board` is a plain value: cloning it is a 64-byte copy, and nothing in the
/// crate keeps a reference to a board between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Standard starting layout:
    /// - White at (3,3) and (4,4)
    /// - Black at (3,4) and (4,3)
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[4][4] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board
    }

    /// Board with no discs at all (for building test positions)
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.x as usize][pos.y as usize]
    }

    /// Place a disc without any flipping.
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, side: Side) {
        self.cells[pos.x as usize][pos.y as usize] = side.cell();
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Total discs on board
    pub fn disc_count(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c != Cell::Empty)
            .count() as u32
    }

    /// Build a board from eight text rows, `y` = 0 first.
    /// Each row lists x = 0..8 using `W`, `B` and `.`.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(BOARD_SIZE).enumerate() {
                board.cells[x][y] = match ch {
                    'W' | 'w' => Cell::White,
                    'B' | 'b' => Cell::Black,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid for Board {
    #[inline]
    fn cell(&self, pos: Pos) -> Cell {
        self.get(pos)
    }

    #[inline]
    fn set_cell(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.x as usize][pos.y as usize] = cell;
    }
}

impl std::fmt::Display for Board {
    /// Rank per line, `y` = 0 at the top
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", x)?;
        }
        writeln!(f)?;
        for y in 0..BOARD_SIZE {
            write!(f, "{} ", y)?;
            for x in 0..BOARD_SIZE {
                let ch = match self.cells[x][y] {
                    Cell::White => 'W',
                    Cell::Black => 'B',
                    Cell::Empty => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
