use crate::common::BoardError;
use core::fmt;

pub const MIN_BOARD_SIZE: u8 = 5;
pub const MAX_BOARD_SIZE: u8 = 10;
pub const DEFAULT_BOARD_SIZE: u8 = 7;

/// Number of consecutive pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Invalid entries tolerated after the first one before a prompt gives up.
pub const MAX_RETRIES: usize = 3;

/// Width (and height) of a square board, validated to lie in
/// `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "u8", into = "u8"))]
pub struct BoardSize(u8);

impl BoardSize {
    pub const DEFAULT: BoardSize = BoardSize(DEFAULT_BOARD_SIZE);

    pub fn new(size: u8) -> Result<Self, BoardError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(BoardSize(size))
        } else {
            Err(BoardError::InvalidSize(size))
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Total number of cells, `size²`.
    pub fn cells(self) -> usize {
        self.get() * self.get()
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = BoardError;

    fn try_from(size: u8) -> Result<Self, Self::Error> {
        BoardSize::new(size)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}
