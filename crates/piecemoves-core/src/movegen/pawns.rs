//! Pawn move generation.
//!
//! Pawns are the one piece whose moving squares and capturing squares differ, so
//! they do not go through the movement tables: advances test for an empty square
//! and never capture, diagonals only ever capture.

use crate::board::BoardView;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::square::Square;

use super::MoveList;
use super::probe::probe;
use super::tables::Step;

/// File steps of the two forward diagonals.
const CAPTURE_FILE_STEPS: [i8; 2] = [1, -1];

/// Generate candidate moves for a pawn of `color` on `from`.
pub(super) fn pawn_moves<B: BoardView + ?Sized>(board: &B, from: Square, color: Color) -> MoveList {
    if from.rank() == color.promotion_zone_rank() {
        return promotions(board, from, color);
    }

    let mut moves = MoveList::new();
    if let Some(single) = advance(board, from, color) {
        moves.push(Move::new(from, single));
        if from.rank() == color.pawn_start_rank() {
            if let Some(double) = advance(board, single, color) {
                moves.push(Move::new(from, double));
            }
        }
    }
    moves.extend(captures(board, from, color));
    moves
}

/// The square one step ahead of `sq`, if it exists and is empty.
fn advance<B: BoardView + ?Sized>(board: &B, sq: Square, color: Color) -> Option<Square> {
    sq.offset(color.forward(), 0)
        .filter(|&target| board.piece_at(target).is_none())
}

/// Diagonal captures onto enemy pieces, file+1 side first.
fn captures<B: BoardView + ?Sized>(
    board: &B,
    from: Square,
    color: Color,
) -> impl Iterator<Item = Move> {
    CAPTURE_FILE_STEPS.into_iter().flat_map(move |file_step| {
        probe(board, from, color, Step::new(color.forward(), file_step), false, true)
    })
}

/// Every promotion a pawn one step from the far rank can make: quietly onto an
/// empty forward square, or by capturing diagonally.
fn promotions<B: BoardView + ?Sized>(board: &B, from: Square, color: Color) -> MoveList {
    advance(board, from, color)
        .into_iter()
        .chain(captures(board, from, color).map(Move::to))
        .flat_map(|to| PromotionPiece::ALL.map(|promo| Move::new_promotion(from, to, promo)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::board::Board;
    use crate::chess_move::{Move, PromotionPiece};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn coords(board: &Board, from: &str, color: Color) -> Vec<String> {
        pawn_moves(board, sq(from), color)
            .iter()
            .map(Move::to_coordinate)
            .collect()
    }

    #[test]
    fn white_start_rank_double_advance() {
        let board = Board::empty();
        assert_eq!(coords(&board, "e2", Color::White), ["e2e3", "e2e4"]);
    }

    #[test]
    fn black_start_rank_double_advance() {
        let board = Board::empty();
        assert_eq!(coords(&board, "c7", Color::Black), ["c7c6", "c7c5"]);
    }

    #[test]
    fn single_advance_off_start_rank() {
        let board = Board::empty();
        assert_eq!(coords(&board, "e3", Color::White), ["e3e4"]);
        assert_eq!(coords(&board, "e5", Color::Black), ["e5e4"]);
    }

    #[test]
    fn blocked_first_square_blocks_double() {
        let mut board = Board::empty();
        board.put_piece(sq("e3"), Piece::BLACK_KNIGHT);
        assert!(coords(&board, "e2", Color::White).is_empty());

        board.put_piece(sq("e3"), Piece::WHITE_KNIGHT);
        assert!(coords(&board, "e2", Color::White).is_empty());
    }

    #[test]
    fn blocked_second_square_allows_single() {
        let mut board = Board::empty();
        board.put_piece(sq("e4"), Piece::BLACK_PAWN);
        assert_eq!(coords(&board, "e2", Color::White), ["e2e3"]);
    }

    #[test]
    fn no_forward_capture() {
        let mut board = Board::empty();
        board.put_piece(sq("d5"), Piece::BLACK_QUEEN);
        assert!(coords(&board, "d4", Color::White).is_empty());
    }

    #[test]
    fn diagonal_captures_only_enemies() {
        let mut board = Board::empty();
        board.put_piece(sq("e5"), Piece::BLACK_ROOK);
        board.put_piece(sq("c5"), Piece::WHITE_ROOK);
        assert_eq!(coords(&board, "d4", Color::White), ["d4d5", "d4e5"]);
    }

    #[test]
    fn black_captures_downward() {
        let mut board = Board::empty();
        board.put_piece(sq("c3"), Piece::WHITE_BISHOP);
        board.put_piece(sq("e3"), Piece::WHITE_KNIGHT);
        assert_eq!(coords(&board, "d4", Color::Black), ["d4d3", "d4e3", "d4c3"]);
    }

    #[test]
    fn edge_file_has_one_diagonal() {
        let mut board = Board::empty();
        board.put_piece(sq("b3"), Piece::BLACK_PAWN);
        assert_eq!(coords(&board, "a2", Color::White), ["a2a3", "a2a4", "a2b3"]);
    }

    #[test]
    fn quiet_promotion() {
        let board = Board::empty();
        let moves = pawn_moves(&board, sq("g7"), Color::White);
        assert_eq!(moves.len(), 4);
        let promos: Vec<_> = moves.iter().map(|mv| mv.promotion()).collect();
        assert_eq!(
            promos,
            PromotionPiece::ALL.map(Some).to_vec(),
            "promotion order should be Q, R, B, N"
        );
        assert!(moves.iter().all(|mv| mv.to() == sq("g8")));
    }

    #[test]
    fn capture_promotions_and_blocked_forward() {
        let mut board = Board::empty();
        board.put_piece(sq("b1"), Piece::WHITE_KNIGHT);
        board.put_piece(sq("a1"), Piece::WHITE_ROOK);
        board.put_piece(sq("c1"), Piece::WHITE_QUEEN);
        let moves = pawn_moves(&board, sq("b2"), Color::Black);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(Move::is_promotion));
        assert_eq!(moves.iter().filter(|mv| mv.to() == sq("c1")).count(), 4);
        assert_eq!(moves.iter().filter(|mv| mv.to() == sq("a1")).count(), 4);
    }

    #[test]
    fn promotion_zone_skips_double_and_plain_moves() {
        let mut board = Board::empty();
        board.put_piece(sq("d8"), Piece::BLACK_ROOK);
        board.put_piece(sq("f8"), Piece::BLACK_ROOK);
        let moves = pawn_moves(&board, sq("e7"), Color::White);
        assert_eq!(moves.len(), 12);
        assert!(moves.iter().all(Move::is_promotion));
        assert_eq!(
            moves.iter().map(|mv| mv.to().to_string()).collect::<Vec<_>>(),
            ["e8", "e8", "e8", "e8", "f8", "f8", "f8", "f8", "d8", "d8", "d8", "d8"]
        );
    }

    #[test]
    fn diagonal_never_promotes_onto_empty_square() {
        let mut board = Board::empty();
        board.put_piece(sq("h8"), Piece::BLACK_KING);
        let moves = pawn_moves(&board, sq("h7"), Color::White);
        assert!(moves.is_empty());
    }
}
