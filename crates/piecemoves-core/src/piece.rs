//! Colored chess pieces.

use std::fmt;

use crate::board::BoardView;
use crate::color::Color;
use crate::movegen::{MoveList, piece_moves};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A colored chess piece.
///
/// Two pieces are equal exactly when their color and kind match; a piece has no
/// identity beyond that pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceKind::Queen);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceKind::Bishop);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceKind::Knight);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceKind::Rook);
    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceKind::Pawn);

    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceKind::Queen);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceKind::Bishop);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceKind::Knight);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceKind::Rook);
    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceKind::Pawn);

    /// Create a piece from a color and a kind.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Parse a FEN letter into a piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce Black pieces.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the FEN letter for this piece: uppercase for White, lowercase for Black.
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Return `true` if `other` belongs to the opposing side.
    #[inline]
    pub fn is_enemy_of(self, other: Piece) -> bool {
        self.color != other.color
    }

    /// Candidate moves for this piece standing on `from`.
    ///
    /// King safety is not considered. The piece is taken as given; the board is
    /// only consulted for the occupancy of the squares the piece could reach.
    pub fn moves<B: BoardView + ?Sized>(self, board: &B, from: Square) -> MoveList {
        piece_moves(board, from, self)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind.fen_char().to_ascii_uppercase())
    }
}
