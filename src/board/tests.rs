use super::*;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Black.opponent(), Side::White);
    assert_eq!(Side::White.opponent(), Side::Black);
}

#[test]
fn test_side_cell_roundtrip() {
    assert_eq!(Side::White.cell().side(), Some(Side::White));
    assert_eq!(Side::Black.cell().side(), Some(Side::Black));
    assert_eq!(Cell::Empty.side(), None);
}

#[test]
fn test_is_on_board() {
    assert!(is_on_board(0, 0));
    assert!(is_on_board(7, 7));
    assert!(is_on_board(3, 4));
    assert!(!is_on_board(-1, 0));
    assert!(!is_on_board(0, -1));
    assert!(!is_on_board(8, 0));
    assert!(!is_on_board(0, 8));
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 * 8 + 4);
    assert_eq!(Pos::from_index(28), pos);
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(0, 0).offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(7, 7).offset(0, 1), None);
}

#[test]
fn test_pos_ordering() {
    // x outer, y inner
    assert!(Pos::new(0, 7) < Pos::new(1, 0));
    assert!(Pos::new(2, 3) < Pos::new(2, 4));
    let all: Vec<Pos> = Pos::all().collect();
    assert_eq!(all.len(), TOTAL_CELLS);
    assert_eq!(all[0], Pos::new(0, 0));
    assert_eq!(all[63], Pos::new(7, 7));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
}

#[test]
fn test_starting_layout() {
    let board = Board::new();
    assert_eq!(board.get(Pos::new(3, 3)), Cell::White);
    assert_eq!(board.get(Pos::new(4, 4)), Cell::White);
    assert_eq!(board.get(Pos::new(3, 4)), Cell::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Cell::Black);
    assert_eq!(board.disc_count(), 4);
    assert_eq!(board.count(Side::White), 2);
    assert_eq!(board.count(Side::Black), 2);
}

#[test]
fn test_from_rows_matches_layout() {
    let board = Board::from_rows([
        "........",
        "........",
        "........",
        "...WB...",
        "...BW...",
        "........",
        "........",
        "........",
    ]);
    assert_eq!(board, Board::new());
}

#[test]
fn test_bitboard_conversion() {
    let board = Board::new();
    let bb = Bitboard::from(&board);
    for pos in Pos::all() {
        assert_eq!(bb.cell(pos), board.get(pos));
    }
    assert_eq!(bb.count(Side::White), 2);
    assert_eq!(bb.count(Side::Black), 2);
    assert_eq!(Board::from(&bb), board);
}

#[test]
fn test_bitboard_set_overwrites() {
    let mut bb = Bitboard::new();
    let pos = Pos::new(5, 2);
    bb.set_cell(pos, Cell::White);
    bb.set_cell(pos, Cell::Black);
    assert_eq!(bb.cell(pos), Cell::Black);
    assert_eq!(bb.count(Side::White), 0);
    bb.set_cell(pos, Cell::Empty);
    assert_eq!(bb.cell(pos), Cell::Empty);
    assert_eq!(bb.empty_mask(), u64::MAX);
}

#[test]
fn test_bitboard_iter_ones() {
    let bb = Bitboard::from(&Board::new());
    let white: Vec<Pos> = bb.iter_ones(Side::White).collect();
    assert_eq!(white, vec![Pos::new(3, 3), Pos::new(4, 4)]);
}
