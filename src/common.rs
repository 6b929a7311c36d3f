//! Common types for Connect Four: cell values, player identities and errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// One of the two players. There is deliberately no "empty" identity, so a
/// win can only ever be checked for an actual player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Numeric tag stored on the board: `1` or `2`.
    pub fn tag(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Zero-based index, handy for per-player arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = PlayerError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(PlayerError::InvalidTag(other)),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.tag())
    }
}

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player(PlayerId),
}

impl Cell {
    /// `0` for empty, otherwise the owner's tag.
    pub fn tag(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Player(p) => p.tag(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Raised when a raw tag cannot name a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    /// `0` is the empty tag; anything above `2` is unknown.
    InvalidTag(u8),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::InvalidTag(tag) => {
                write!(f, "Invalid player tag {} (expected 1 or 2)", tag)
            }
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Board size outside the supported range.
    InvalidSize(u8),
    /// Column index is not on the board.
    ColumnOutOfRange(usize),
    /// Column has no empty cell left.
    ColumnFull(usize),
    /// Snapshot has overlapping or floating pieces.
    InconsistentState,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidSize(size) => write!(
                f,
                "Board size {} is invalid; allowed sizes are {}-{}",
                size,
                crate::config::MIN_BOARD_SIZE,
                crate::config::MAX_BOARD_SIZE
            ),
            BoardError::ColumnOutOfRange(col) => write!(f, "Column {} is out of range", col + 1),
            BoardError::ColumnFull(col) => write!(f, "Column {} is full", col + 1),
            BoardError::InconsistentState => {
                write!(f, "Board state has overlapping or floating pieces")
            }
        }
    }
}

/// Errors returned by Game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already has a winner or ended in a draw.
    GameOver,
    /// A replayed turn belongs to the player who is not on move.
    OutOfTurn { expected: PlayerId, found: PlayerId },
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::OutOfTurn { expected, found } => {
                write!(f, "Out of turn: expected {}, found {}", expected, found)
            }
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}
