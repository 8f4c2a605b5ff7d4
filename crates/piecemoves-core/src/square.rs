//! Board squares addressed by 1-based rank and file.

use std::fmt;

/// Return `true` if both coordinates lie on the board (1..=8).
///
/// Coordinates are signed so that a step off either edge can be tested before a
/// square is ever built.
#[inline]
pub const fn in_bounds(rank: i8, file: i8) -> bool {
    rank >= 1 && rank <= 8 && file >= 1 && file <= 8
}

/// A square on the board.
///
/// Rank and file are both 1..=8 (file 1 is the a-file). Stored as a
/// little-endian rank-file index, so a1 = 0, b1 = 1, ..., h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a 1-based rank and file, returning `None` if either is off the board.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Square> {
        if rank >= 1 && rank <= 8 && file >= 1 && file <= 8 {
            Some(Square((rank - 1) * 8 + (file - 1)))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square from a zero-based index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse an algebraic coordinate such as "e4".
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let [file_byte, rank_byte] = s.as_bytes() else {
            return None;
        };
        if !(b'a'..=b'h').contains(file_byte) || !(b'1'..=b'8').contains(rank_byte) {
            return None;
        }
        Square::new(rank_byte - b'0', file_byte - b'a' + 1)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the rank, 1..=8.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8 + 1
    }

    /// Return the file, 1..=8.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8 + 1
    }

    /// Return the square displaced by the given rank and file steps, or `None`
    /// if the result falls off the board.
    #[inline]
    pub const fn offset(self, rank_step: i8, file_step: i8) -> Option<Square> {
        let rank = self.rank() as i8 + rank_step;
        let file = self.file() as i8 + file_step;
        if in_bounds(rank, file) {
            Square::new(rank as u8, file as u8)
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() - 1) as char;
        write!(f, "{}{}", file, self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
