//! Candidate move representation, bit-packed into a u16.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

const SRC_MASK: u16 = 0x003F;
const DST_MASK: u16 = 0x0FC0;
const PROMO_MASK: u16 = 0x3000;
const PROMO_FLAG: u16 = 0x4000;
const DST_SHIFT: u32 = 6;
const PROMO_SHIFT: u32 = 12;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Queen = 0,
    Rook = 1,
    Bishop = 2,
    Knight = 3,
}

impl PromotionPiece {
    /// All promotion pieces in the order they are generated.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    /// Return the promotion piece for a kind, or `None` for kings and pawns.
    pub const fn from_piece_kind(kind: PieceKind) -> Option<PromotionPiece> {
        match kind {
            PieceKind::Queen => Some(PromotionPiece::Queen),
            PieceKind::Rook => Some(PromotionPiece::Rook),
            PieceKind::Bishop => Some(PromotionPiece::Bishop),
            PieceKind::Knight => Some(PromotionPiece::Knight),
            PieceKind::King | PieceKind::Pawn => None,
        }
    }

    const fn from_bits(bits: u16) -> PromotionPiece {
        match bits {
            0 => PromotionPiece::Queen,
            1 => PromotionPiece::Rook,
            2 => PromotionPiece::Bishop,
            _ => PromotionPiece::Knight,
        }
    }
}

/// A candidate move encoded in 16 bits.
///
/// ```text
/// bits  0-5:  source square      (0-63)
/// bits  6-11: destination square (0-63)
/// bits 12-13: promotion piece    (Queen=0, Rook=1, Bishop=2, Knight=3)
/// bit  14:    promotion flag
/// ```
///
/// Whether a move captures is not recorded; that is a property of the board the
/// move was generated against.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Create a move without promotion.
    pub const fn new(from: Square, to: Square) -> Move {
        Move((from.index() as u16) | ((to.index() as u16) << DST_SHIFT))
    }

    /// Create a pawn move that promotes on arrival.
    pub const fn new_promotion(from: Square, to: Square, promo: PromotionPiece) -> Move {
        Move(
            (from.index() as u16)
                | ((to.index() as u16) << DST_SHIFT)
                | ((promo as u16) << PROMO_SHIFT)
                | PROMO_FLAG,
        )
    }

    /// Extract the source square.
    pub const fn from(self) -> Square {
        Square::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    /// Extract the destination square.
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }

    /// Extract the promotion piece, if this move promotes.
    pub const fn promotion(self) -> Option<PromotionPiece> {
        if self.is_promotion() {
            Some(PromotionPiece::from_bits((self.0 & PROMO_MASK) >> PROMO_SHIFT))
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.0 & PROMO_FLAG != 0
    }

    /// Return the coordinate-notation string, e.g. `e2e4` or `e7e8q`.
    pub fn to_coordinate(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_piece_kind().fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Move, PromotionPiece};
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn size_of_move() {
        assert_eq!(std::mem::size_of::<Move>(), 2);
    }

    #[test]
    fn plain_move_roundtrip() {
        let mv = Move::new(sq("e2"), sq("e4"));
        assert_eq!(mv.from(), sq("e2"));
        assert_eq!(mv.to(), sq("e4"));
        assert_eq!(mv.promotion(), None);
        assert!(!mv.is_promotion());
    }

    #[test]
    fn corner_squares() {
        let mv = Move::new(sq("a1"), sq("h8"));
        assert_eq!(mv.from(), sq("a1"));
        assert_eq!(mv.to(), sq("h8"));

        let mv = Move::new(sq("h8"), sq("a1"));
        assert_eq!(mv.from(), sq("h8"));
        assert_eq!(mv.to(), sq("a1"));
    }

    #[test]
    fn promotion_all_pieces() {
        for promo in PromotionPiece::ALL {
            let mv = Move::new_promotion(sq("b7"), sq("a8"), promo);
            assert_eq!(mv.from(), sq("b7"));
            assert_eq!(mv.to(), sq("a8"));
            assert_eq!(mv.promotion(), Some(promo));
            assert!(mv.is_promotion());
        }
    }

    #[test]
    fn promotion_differs_from_plain_move() {
        let plain = Move::new(sq("e7"), sq("e8"));
        let queen = Move::new_promotion(sq("e7"), sq("e8"), PromotionPiece::Queen);
        assert_ne!(plain, queen);
    }

    #[test]
    fn coordinate_notation() {
        assert_eq!(Move::new(sq("e2"), sq("e4")).to_coordinate(), "e2e4");
        let mv = Move::new_promotion(sq("e7"), sq("e8"), PromotionPiece::Knight);
        assert_eq!(mv.to_coordinate(), "e7e8n");
        let mv = Move::new_promotion(sq("d2"), sq("c1"), PromotionPiece::Queen);
        assert_eq!(format!("{mv:?}"), "Move(d2c1q)");
    }

    #[test]
    fn equality_and_hash() {
        let mv1 = Move::new(sq("e2"), sq("e4"));
        let mv2 = Move::new(sq("e2"), sq("e4"));
        let mv3 = Move::new(sq("d2"), sq("d4"));
        assert_eq!(mv1, mv2);
        assert_ne!(mv1, mv3);

        let set: HashSet<Move> = [mv1, mv2, mv3].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn promotion_piece_kind_conversions() {
        for promo in PromotionPiece::ALL {
            assert_eq!(PromotionPiece::from_piece_kind(promo.to_piece_kind()), Some(promo));
        }
        assert_eq!(PromotionPiece::from_piece_kind(PieceKind::King), None);
        assert_eq!(PromotionPiece::from_piece_kind(PieceKind::Pawn), None);
    }

    #[test]
    fn exhaustive_square_roundtrip() {
        for from in Square::all() {
            for to in Square::all() {
                let mv = Move::new(from, to);
                assert_eq!(mv.from(), from, "source mismatch for {from}{to}");
                assert_eq!(mv.to(), to, "dest mismatch for {from}{to}");
            }
        }
    }
}
