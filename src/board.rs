//! Game board state: one occupancy `BitBoard` per player plus column heights.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, PlayerId};
use crate::config::{BoardSize, MAX_BOARD_SIZE};
use core::fmt;

type BB = BitBoard<u128>;

/// Read-only view of a square grid, as needed by the win detector.
///
/// `value_at` takes signed coordinates and must answer [`Cell::Empty`] for
/// anything outside `[0, size)`, so callers can probe past the border
/// without checking bounds first.
pub trait CellLookup {
    fn size(&self) -> usize;
    fn value_at(&self, row: isize, col: isize) -> Cell;
}

/// Serializable board state for syncing or saving games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub size: BoardSize,
    pub pieces: [BB; 2],
}

/// Main board state. Row `0` is the top, row `size - 1` the bottom.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    pieces: [BB; 2],
    heights: [u8; MAX_BOARD_SIZE as usize],
}

impl Board {
    /// Create an empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        let empty = BB::new(size.get());
        Board {
            size,
            pieces: [empty; 2],
            heights: [0; MAX_BOARD_SIZE as usize],
        }
    }

    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Occupancy mask of one player's pieces.
    pub fn pieces(&self, player: PlayerId) -> BB {
        self.pieces[player.index()]
    }

    /// Occupancy mask of every piece on the board.
    pub fn occupied(&self) -> BB {
        self.pieces[0] | self.pieces[1]
    }

    /// Number of pieces placed so far.
    pub fn piece_count(&self) -> usize {
        self.occupied().count_ones()
    }

    /// Cell at an in-range coordinate.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if self.pieces[0].get(row, col)? {
            Ok(Cell::Player(PlayerId::One))
        } else if self.pieces[1].get(row, col)? {
            Ok(Cell::Player(PlayerId::Two))
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Row a piece dropped into `col` would land on, if the column has room.
    pub fn landing_row(&self, col: usize) -> Result<usize, BoardError> {
        let size = self.size.get();
        if col >= size {
            return Err(BoardError::ColumnOutOfRange(col));
        }
        let height = self.heights[col] as usize;
        if height >= size {
            return Err(BoardError::ColumnFull(col));
        }
        Ok(size - 1 - height)
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        matches!(self.landing_row(col), Err(BoardError::ColumnFull(_)))
    }

    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Columns that can still accept a piece, left to right.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.size.get()).filter(move |&col| (self.heights[col] as usize) < self.size.get())
    }

    /// Drop a piece into `col`; it falls to the lowest empty row.
    /// Returns the `(row, col)` it landed on.
    pub fn drop_piece(&mut self, col: usize, player: PlayerId) -> Result<(usize, usize), BoardError> {
        let row = self.landing_row(col)?;
        self.pieces[player.index()].set(row, col)?;
        self.heights[col] += 1;
        Ok((row, col))
    }

    /// Remove every piece, keeping the size.
    pub fn clear(&mut self) {
        for bb in self.pieces.iter_mut() {
            bb.clear_all();
        }
        self.heights = [0; MAX_BOARD_SIZE as usize];
    }
}

impl CellLookup for Board {
    fn size(&self) -> usize {
        self.size.get()
    }

    fn value_at(&self, row: isize, col: isize) -> Cell {
        if self.pieces[0].contains(row, col) {
            Cell::Player(PlayerId::One)
        } else if self.pieces[1].contains(row, col) {
            Cell::Player(PlayerId::Two)
        } else {
            Cell::Empty
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size.get();
        writeln!(f, "Board {} {{", self.size)?;
        for row in 0..size {
            write!(f, "  ")?;
            for col in 0..size {
                let ch = match self.value_at(row as isize, col as isize) {
                    Cell::Empty => '.',
                    Cell::Player(p) => (b'0' + p.tag()) as char,
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            size: b.size,
            pieces: b.pieces,
        }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = BoardError;

    /// Rebuild a board, rejecting snapshots whose pieces overlap, lie outside
    /// the grid or float above an empty cell.
    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        let size = state.size.get();
        let [first, second] = state.pieces;
        if first.size() != size || second.size() != size {
            return Err(BoardError::InconsistentState);
        }
        if !first.is_within_bounds() || !second.is_within_bounds() || !(first & second).is_empty() {
            return Err(BoardError::InconsistentState);
        }
        let occupied = first | second;
        let mut heights = [0u8; MAX_BOARD_SIZE as usize];
        for (row, col) in occupied.iter_set_bits() {
            if row + 1 < size && !occupied.get(row + 1, col)? {
                return Err(BoardError::InconsistentState);
            }
            heights[col] += 1;
        }
        Ok(Board {
            size: state.size,
            pieces: state.pieces,
            heights,
        })
    }
}
