//! FEN placement parsing and serialization for [`Board`].
//!
//! Only the placement field is meaningful here. Any further fields of a full FEN
//! string (side to move, castling, en passant, counters) are accepted and ignored.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// The placement field of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first
            let rank = 8 - rank_index as u8;
            let mut file: u8 = 1;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file = file.saturating_add(digit as u8);
                    continue;
                }

                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let sq = Square::new(rank, file).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: file as usize,
                })?;
                board.put_piece(sq, piece);
                file += 1;
            }

            if file != 9 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file as usize - 1,
                });
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1u8..=8).rev() {
            let mut empty_count = 0u8;

            for file in 1u8..=8 {
                match Square::new(rank, file).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
