//! Win detection around the most recently placed piece.
//!
//! Only the four lines through the last move are inspected, each at most
//! `WIN_LENGTH - 1` cells in either direction, so a check costs the same on
//! every board size.

use crate::board::CellLookup;
use crate::common::{Cell, PlayerId};
use crate::config::WIN_LENGTH;

/// A line through a cell along which four in a row can be formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Left ↔ right.
    Horizontal,
    /// Up ↕ down.
    Vertical,
    /// Bottom-left ↗ top-right.
    Rising,
    /// Top-left ↘ bottom-right.
    Falling,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::Rising, Axis::Falling];

    /// The two opposing `(row, col)` unit steps spanning this axis. Rows grow
    /// downwards.
    pub const fn steps(self) -> [(isize, isize); 2] {
        match self {
            Axis::Horizontal => [(0, -1), (0, 1)],
            Axis::Vertical => [(-1, 0), (1, 0)],
            Axis::Rising => [(1, -1), (-1, 1)],
            Axis::Falling => [(-1, -1), (1, 1)],
        }
    }
}

/// Count `player`'s pieces walking away from `origin` along `step`, stopping
/// at the first cell that is not theirs.
fn count_direction<B: CellLookup + ?Sized>(
    board: &B,
    (row, col): (isize, isize),
    (dr, dc): (isize, isize),
    player: PlayerId,
) -> usize {
    let target = Cell::Player(player);
    (1..WIN_LENGTH as isize)
        .take_while(|&i| board.value_at(row.wrapping_add(dr * i), col.wrapping_add(dc * i)) == target)
        .count()
}

/// Length of the contiguous run through `last_move` along `axis`, counting the
/// cell itself and capped at [`WIN_LENGTH`]. Zero when `player` does not own
/// `last_move`.
pub fn run_length<B: CellLookup + ?Sized>(
    board: &B,
    last_move: (usize, usize),
    player: PlayerId,
    axis: Axis,
) -> usize {
    let origin = (last_move.0 as isize, last_move.1 as isize);
    if board.value_at(origin.0, origin.1) != Cell::Player(player) {
        return 0;
    }
    let [back, forth] = axis.steps();
    let run = 1 + count_direction(board, origin, back, player) + count_direction(board, origin, forth, player);
    run.min(WIN_LENGTH)
}

/// First axis, in [`Axis::ALL`] order, on which `last_move` completes four in a row.
pub fn winning_axis<B: CellLookup + ?Sized>(
    board: &B,
    last_move: (usize, usize),
    player: PlayerId,
) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .find(|&axis| run_length(board, last_move, player, axis) >= WIN_LENGTH)
}

/// Does the piece at `last_move` give `player` four in a row?
pub fn check_win<B: CellLookup + ?Sized>(board: &B, last_move: (usize, usize), player: PlayerId) -> bool {
    winning_axis(board, last_move, player).is_some()
}
