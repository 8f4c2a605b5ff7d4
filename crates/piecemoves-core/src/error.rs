//! Error types for FEN placement parsing and move generation.

use crate::square::Square;

/// Errors that occur when parsing the placement field of a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The input contains no placement field at all.
    #[error("empty FEN string")]
    Empty,
    /// The placement field does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors raised when a move query breaks its preconditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveGenError {
    /// Moves were requested for a square with nothing on it.
    #[error("missing piece at source square {square}")]
    MissingPiece {
        /// The empty square that was queried.
        square: Square,
    },
}

#[cfg(test)]
mod tests {
    use super::{FenError, MoveGenError};
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongRankCount { found: 4 };
        assert_eq!(err.to_string(), "expected 8 ranks in piece placement, found 4");
        let err = FenError::InvalidPieceChar { character: 'x' };
        assert_eq!(err.to_string(), "invalid piece character: 'x'");
    }

    #[test]
    fn missing_piece_names_square() {
        let err = MoveGenError::MissingPiece {
            square: Square::from_algebraic("c3").unwrap(),
        };
        assert_eq!(err.to_string(), "missing piece at source square c3");
    }
}
