//! A square occupancy bitboard whose side length is chosen at runtime.
//!
//! The type is `no_std` friendly and avoids heap allocations. A board of side
//! `size` is packed row-major into an unsigned integer `T`, so `size * size`
//! must not exceed `T`'s bit width (`u128` covers every Connect Four size).

use core::ops::{BitAnd, BitOr};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size*size exceeds capacity of `T::BITS`.
    SizeTooLarge { size: usize, capacity: usize },
    /// Row or column index is out of bounds [0..size).
    IndexOutOfBounds { row: usize, col: usize },
    /// Raw bits are set beyond the `size*size` cells of the board.
    StrayBits { size: usize },
}

impl core::fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { size, capacity } => {
                write!(
                    f,
                    "SizeTooLarge: size*size={} exceeds T::BITS={}",
                    size * size,
                    capacity
                )
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            BitBoardError::StrayBits { size } => {
                write!(f, "StrayBits: bits set outside the {}x{} board", size, size)
            }
        }
    }
}

/// A `size × size` bitboard stored in the unsigned integer `T`.
///
/// Deserialization goes through [`BitBoard::try_new`], so a decoded board
/// always fits in `T` and has no bits outside its cells.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(
        try_from = "RawBitBoard<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    size: usize,
}

/// Unchecked wire form of a [`BitBoard`].
#[cfg(feature = "std")]
#[doc(hidden)]
#[derive(serde::Deserialize)]
pub struct RawBitBoard<T> {
    bits: T,
    size: usize,
}

#[cfg(feature = "std")]
impl<T> TryFrom<RawBitBoard<T>> for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Error = BitBoardError;

    fn try_from(raw: RawBitBoard<T>) -> Result<Self, Self::Error> {
        let mut board = Self::try_new(raw.size)?;
        board.bits = raw.bits;
        if !board.is_within_bounds() {
            return Err(BitBoardError::StrayBits { size: raw.size });
        }
        Ok(board)
    }
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    #[inline]
    fn mask(&self) -> T {
        let board_bits = self.size * self.size;
        if board_bits == Self::capacity() {
            !T::zero()
        } else {
            (T::one() << board_bits) - T::one()
        }
    }

    /// Create a new empty bitboard (all bits cleared). Callers guarantee that
    /// `size * size` fits in `T`; see [`BitBoard::try_new`] otherwise.
    #[inline]
    pub fn new(size: usize) -> Self {
        debug_assert!(size.saturating_mul(size) <= Self::capacity());
        BitBoard {
            bits: T::zero(),
            size,
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if size*size > T::BITS.
    pub fn try_new(size: usize) -> Result<Self, BitBoardError> {
        let capacity = Self::capacity();
        if size.saturating_mul(size) > capacity {
            Err(BitBoardError::SizeTooLarge { size, capacity })
        } else {
            Ok(BitBoard {
                bits: T::zero(),
                size,
            })
        }
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every cell of the board is set.
    pub fn is_full(&self) -> bool {
        self.bits == self.mask()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(row, col)?;
        Ok(self.bit(row * self.size + col))
    }

    /// Signed lookup that reports `false` for anything off the board.
    #[inline]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        row < self.size && col < self.size && self.bit(row * self.size + col)
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        let idx = row * self.size + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        ((self.bits >> idx) & T::one()) != T::zero()
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= self.size || col >= self.size {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(size: usize, iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::try_new(size)?;
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }

    /// True when no bits are set beyond `size * size`.
    pub fn is_within_bounds(&self) -> bool {
        self.bits & !self.mask() == T::zero()
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}> {}x{}:", any::type_name::<T>(), self.size, self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if self.bit(r * self.size + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<T> Iterator for SetBits<'_, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let size = self.board.size;
        while self.idx < size * size {
            let idx = self.idx;
            self.idx += 1;
            if self.board.bit(idx) {
                return Some((idx / size, idx % size));
            }
        }
        None
    }
}

/// Bitwise AND for intersecting two bitboards of the same size.
impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        BitBoard {
            bits: self.bits & rhs.bits,
            size: self.size,
        }
    }
}

/// Bitwise OR for combining two bitboards of the same size.
impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        BitBoard {
            bits: self.bits | rhs.bits,
            size: self.size,
        }
    }
}
