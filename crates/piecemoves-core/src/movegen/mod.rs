//! Candidate move generation for a single piece.
//!
//! Moves are geometric candidates only: they respect board edges and occupancy
//! but not king safety, castling, en passant, or whose turn it is.

mod pawns;
mod probe;
mod tables;

use tracing::trace;

use crate::board::BoardView;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::MoveGenError;
use crate::piece::Piece;
use crate::square::Square;

use self::pawns::pawn_moves;
use self::probe::probe;
use self::tables::{Movement, Pattern, pattern};

/// Capacity of a [`MoveList`]. A queen in the centre of an empty board reaches 27
/// squares, the most any single piece can.
pub const MAX_PIECE_MOVES: usize = 32;

const FILLER: Move = Move::new(Square::from_index_unchecked(0), Square::from_index_unchecked(0));

/// Stack-allocated buffer for the moves of one piece, in generation order.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_PIECE_MOVES],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [FILLER; MAX_PIECE_MOVES],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < MAX_PIECE_MOVES);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Iterate over the moves by value.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        for mv in iter {
            self.push(mv);
        }
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        list.extend(iter);
        list
    }
}

/// Candidate moves for whatever piece stands on `from`.
///
/// # Errors
///
/// Returns [`MoveGenError::MissingPiece`] if `from` is empty.
pub fn generate_moves<B: BoardView + ?Sized>(board: &B, from: Square) -> Result<MoveList, MoveGenError> {
    let piece = board
        .piece_at(from)
        .ok_or(MoveGenError::MissingPiece { square: from })?;
    Ok(piece_moves(board, from, piece))
}

/// Candidate moves for `piece` standing on `from`.
pub(crate) fn piece_moves<B: BoardView + ?Sized>(board: &B, from: Square, piece: Piece) -> MoveList {
    let moves: MoveList = match pattern(piece.kind()) {
        Pattern::Vectors(movements) => vector_moves(board, from, piece.color(), movements).collect(),
        Pattern::Pawn => pawn_moves(board, from, piece.color()),
    };
    trace!(square = %from, piece = %piece, count = moves.len(), "generated candidate moves");
    moves
}

/// Union of every probe in `movements`, in table order.
fn vector_moves<B: BoardView + ?Sized>(
    board: &B,
    from: Square,
    color: Color,
    movements: &'static [Movement],
) -> impl Iterator<Item = Move> {
    movements.iter().flat_map(move |movement| {
        movement
            .steps
            .iter()
            .flat_map(move |&step| probe(board, from, color, step, movement.repeat, false))
    })
}
