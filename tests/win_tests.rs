use connect_four::{
    check_win, run_length, winning_axis, Axis, Board, BoardSize, Cell, CellLookup, PlayerId,
};
use proptest::prelude::*;

/// Free-form grid for positions that gravity would not allow.
struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    fn put(&mut self, row: usize, col: usize, player: PlayerId) {
        self.cells[row * self.size + col] = Cell::Player(player);
    }
}

impl CellLookup for Grid {
    fn size(&self) -> usize {
        self.size
    }

    fn value_at(&self, row: isize, col: isize) -> Cell {
        let size = self.size as isize;
        if row < 0 || col < 0 || row >= size || col >= size {
            return Cell::Empty;
        }
        self.cells[row as usize * self.size + col as usize]
    }
}

fn board(size: u8) -> Board {
    Board::new(BoardSize::new(size).unwrap())
}

#[test]
fn test_horizontal_win_on_bottom_row() {
    let mut board = board(7);
    for col in 0..3 {
        board.drop_piece(col, PlayerId::One).unwrap();
    }
    assert!(!check_win(&board, (6, 2), PlayerId::One));
    let last = board.drop_piece(3, PlayerId::One).unwrap();
    assert_eq!(last, (6, 3));
    assert!(check_win(&board, last, PlayerId::One));
    assert_eq!(winning_axis(&board, last, PlayerId::One), Some(Axis::Horizontal));
}

#[test]
fn test_falling_diagonal_win() {
    let mut grid = Grid::new(7);
    for i in 0..3 {
        grid.put(i, i, PlayerId::Two);
    }
    assert!(!check_win(&grid, (2, 2), PlayerId::Two));
    grid.put(3, 3, PlayerId::Two);
    assert!(check_win(&grid, (3, 3), PlayerId::Two));
    assert_eq!(winning_axis(&grid, (3, 3), PlayerId::Two), Some(Axis::Falling));
    // any member of the run reports the win
    for i in 0..4 {
        assert!(check_win(&grid, (i, i), PlayerId::Two));
    }
}

#[test]
fn test_rising_diagonal_win_with_gravity() {
    let mut board = board(7);
    board.drop_piece(0, PlayerId::One).unwrap();

    board.drop_piece(1, PlayerId::Two).unwrap();
    board.drop_piece(1, PlayerId::One).unwrap();

    board.drop_piece(2, PlayerId::Two).unwrap();
    board.drop_piece(2, PlayerId::Two).unwrap();
    board.drop_piece(2, PlayerId::One).unwrap();

    board.drop_piece(3, PlayerId::Two).unwrap();
    board.drop_piece(3, PlayerId::Two).unwrap();
    board.drop_piece(3, PlayerId::Two).unwrap();
    let last = board.drop_piece(3, PlayerId::One).unwrap();

    assert_eq!(last, (3, 3));
    assert_eq!(winning_axis(&board, last, PlayerId::One), Some(Axis::Rising));
}

#[test]
fn test_vertical_win_from_either_end() {
    let mut board = board(6);
    let mut cells = Vec::new();
    for _ in 0..4 {
        cells.push(board.drop_piece(2, PlayerId::Two).unwrap());
    }
    let bottom = cells[0];
    let top = cells[3];
    assert!(check_win(&board, top, PlayerId::Two));
    assert!(check_win(&board, bottom, PlayerId::Two));
    assert_eq!(winning_axis(&board, bottom, PlayerId::Two), Some(Axis::Vertical));
}

#[test]
fn test_gap_is_not_a_win() {
    // P _ P P P along the bottom row
    let mut grid = Grid::new(7);
    for col in [0, 2, 3, 4] {
        grid.put(6, col, PlayerId::One);
    }
    for col in [0, 2, 3, 4] {
        assert!(!check_win(&grid, (6, col), PlayerId::One));
    }
    assert_eq!(run_length(&grid, (6, 0), PlayerId::One, Axis::Horizontal), 1);

    // closing the gap wins from every cell of the run
    grid.put(6, 1, PlayerId::One);
    for col in 0..5 {
        assert!(check_win(&grid, (6, col), PlayerId::One));
    }
}

#[test]
fn test_asymmetric_run_counts() {
    // two left, the new piece, one right
    let mut grid = Grid::new(5);
    for col in [0, 1, 3] {
        grid.put(2, col, PlayerId::Two);
    }
    grid.put(2, 2, PlayerId::Two);
    assert!(check_win(&grid, (2, 2), PlayerId::Two));
}

#[test]
fn test_three_against_border_is_not_a_win() {
    let mut board = board(5);
    for col in 2..5 {
        board.drop_piece(col, PlayerId::One).unwrap();
    }
    for col in 2..5 {
        assert!(!check_win(&board, (4, col), PlayerId::One));
    }

    let mut grid = Grid::new(5);
    for i in 0..3 {
        grid.put(i, 4 - i, PlayerId::Two);
    }
    assert!(!check_win(&grid, (0, 4), PlayerId::Two));
    assert_eq!(run_length(&grid, (0, 4), PlayerId::Two, Axis::Rising), 3);
}

#[test]
fn test_opponent_pieces_break_the_run() {
    let mut board = board(7);
    for col in [0, 1, 3, 4] {
        board.drop_piece(col, PlayerId::One).unwrap();
    }
    board.drop_piece(2, PlayerId::Two).unwrap();
    assert!(!check_win(&board, (6, 2), PlayerId::Two));
    assert!(!check_win(&board, (6, 1), PlayerId::One));
    assert!(!check_win(&board, (6, 3), PlayerId::One));
}

#[test]
fn test_cell_not_owned_by_player_never_wins() {
    // One owns both sides of an opponent piece
    let mut split = board(7);
    for col in [0, 1, 3, 4] {
        split.drop_piece(col, PlayerId::One).unwrap();
    }
    split.drop_piece(2, PlayerId::Two).unwrap();
    assert!(!check_win(&split, (6, 2), PlayerId::One));
    assert_eq!(winning_axis(&split, (6, 2), PlayerId::One), None);
    assert_eq!(run_length(&split, (6, 2), PlayerId::One, Axis::Horizontal), 0);

    // an empty cell next to three of One's pieces
    let mut three = board(7);
    for col in 0..3 {
        three.drop_piece(col, PlayerId::One).unwrap();
    }
    assert!(!check_win(&three, (6, 3), PlayerId::One));

    // an empty cell between two runs of One
    let mut grid = Grid::new(7);
    for col in [0, 1, 2, 4, 5, 6] {
        grid.put(3, col, PlayerId::One);
    }
    assert!(!check_win(&grid, (3, 3), PlayerId::One));
    assert!(!check_win(&grid, (3, 3), PlayerId::Two));
}

#[test]
fn test_empty_and_single_piece_boards() {
    let empty = board(8);
    for row in 0..8 {
        for col in 0..8 {
            assert!(!check_win(&empty, (row, col), PlayerId::One));
            assert!(!check_win(&empty, (row, col), PlayerId::Two));
        }
    }

    let mut single = board(8);
    let last = single.drop_piece(4, PlayerId::Two).unwrap();
    assert!(!check_win(&single, last, PlayerId::Two));
    for axis in Axis::ALL {
        assert_eq!(run_length(&single, last, PlayerId::Two, axis), 1);
    }
}

#[test]
fn test_far_out_of_range_move_does_not_panic() {
    let mut board = board(5);
    for col in 0..4 {
        board.drop_piece(col, PlayerId::One).unwrap();
    }
    assert!(!check_win(&board, (usize::MAX, usize::MAX), PlayerId::One));
    assert!(!check_win(&board, (isize::MAX as usize, 0), PlayerId::One));
}

/// Cells of a `len`-long line along `axis`, placed on the board by the two seeds.
fn run_cells(axis: Axis, len: usize, size: usize, row_seed: usize, col_seed: usize) -> Vec<(usize, usize)> {
    let [_, (dr, dc)] = axis.steps();
    let pick = |step: isize, seed: usize| match step {
        0 => seed % size,
        1 => seed % (size - len + 1),
        _ => len - 1 + seed % (size - len + 1),
    };
    let (row, col) = (pick(dr, row_seed) as isize, pick(dc, col_seed) as isize);
    (0..len as isize)
        .map(|k| ((row + dr * k) as usize, (col + dc * k) as usize))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn four_in_a_row_wins_from_every_cell(
        size in 5usize..=10,
        axis in prop::sample::select(Axis::ALL.to_vec()),
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
        two in any::<bool>(),
        noise in prop::collection::vec((0usize..10, 0usize..10), 0..12),
    ) {
        let cells = run_cells(axis, 4, size, row_seed, col_seed);
        let player = if two { PlayerId::Two } else { PlayerId::One };

        let mut grid = Grid::new(size);
        for (r, c) in noise {
            if r < size && c < size && !cells.contains(&(r, c)) {
                grid.put(r, c, player.other());
            }
        }
        for &(r, c) in &cells {
            grid.put(r, c, player);
        }
        for &cell in &cells {
            prop_assert!(check_win(&grid, cell, player));
            prop_assert_eq!(run_length(&grid, cell, player, axis), 4);
        }
    }

    #[test]
    fn gapped_run_never_wins(
        size in 5usize..=10,
        axis in prop::sample::select(Axis::ALL.to_vec()),
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        // P _ P P P
        let cells = run_cells(axis, 5, size, row_seed, col_seed);

        let mut grid = Grid::new(size);
        for (i, &(r, c)) in cells.iter().enumerate() {
            if i != 1 {
                grid.put(r, c, PlayerId::One);
            }
        }
        for (i, &cell) in cells.iter().enumerate() {
            if i != 1 {
                prop_assert!(!check_win(&grid, cell, PlayerId::One));
            }
        }
    }

    #[test]
    fn single_piece_never_wins(size in 5u8..=10, col_seed in any::<usize>(), two in any::<bool>()) {
        let player = if two { PlayerId::Two } else { PlayerId::One };
        let mut board = board(size);
        let last = board.drop_piece(col_seed % size as usize, player).unwrap();
        prop_assert!(!check_win(&board, last, player));
    }
}
