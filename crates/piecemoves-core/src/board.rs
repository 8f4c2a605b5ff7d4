//! The board: which piece, if any, stands on each square.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Read-only occupancy lookup, the only thing move generation needs from a board.
///
/// [`Board`] implements it; other board representations can implement it to be
/// queried directly.
pub trait BoardView {
    /// Return the piece on `sq`, if any.
    fn piece_at(&self, sq: Square) -> Option<Piece>;
}

/// Back-rank layout from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 mailbox board, indexed by [`Square::index`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting layout.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in (1u8..=8).zip(BACK_RANK) {
            for (color, back, pawns) in [(Color::White, 1, 2), (Color::Black, 8, 7)] {
                if let (Some(back_sq), Some(pawn_sq)) = (Square::new(back, file), Square::new(pawns, file)) {
                    board.put_piece(back_sq, Piece::new(color, kind));
                    board.put_piece(pawn_sq, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Place `piece` on `sq`, returning whatever stood there before.
    pub fn put_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }

    /// Clear `sq`, returning the piece that stood there.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Iterate over occupied squares in index order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl BoardView for Board {
    #[inline]
    fn piece_at(&self, sq: Square) -> Option<Piece> {
        Board::piece_at(self, sq)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1u8..=8).rev() {
            write!(f, "{rank} ")?;
            for file in 1u8..=8 {
                let c = Square::new(rank, file)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or('.', Piece::fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
