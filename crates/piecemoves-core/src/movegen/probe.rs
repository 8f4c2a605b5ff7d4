//! The ray / single-offset primitive shared by every vector-driven piece.

use crate::board::BoardView;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::tables::Step;

/// Lazily walks one step vector away from a square.
///
/// Each step onto an empty square yields a move (unless `capture_only`) and
/// continues only when `repeat` is set. A step onto an enemy piece yields a move
/// and ends the walk; a friendly piece or the board edge ends it silently.
pub(crate) struct Probe<'a, B: ?Sized> {
    board: &'a B,
    from: Square,
    mover: Color,
    current: Square,
    step: Step,
    repeat: bool,
    capture_only: bool,
    done: bool,
}

pub(crate) fn probe<B: BoardView + ?Sized>(
    board: &B,
    from: Square,
    mover: Color,
    step: Step,
    repeat: bool,
    capture_only: bool,
) -> Probe<'_, B> {
    Probe {
        board,
        from,
        mover,
        current: from,
        step,
        repeat,
        capture_only,
        done: false,
    }
}

impl<B: BoardView + ?Sized> Iterator for Probe<'_, B> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while !self.done {
            let Some(target) = self.current.offset(self.step.rank, self.step.file) else {
                self.done = true;
                break;
            };
            self.current = target;
            self.done = !self.repeat;

            match self.board.piece_at(target) {
                None if self.capture_only => {}
                None => return Some(Move::new(self.from, target)),
                Some(occupant) => {
                    self.done = true;
                    if occupant.color() != self.mover {
                        return Some(Move::new(self.from, target));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::probe;
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::movegen::tables::Step;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn targets(moves: impl Iterator<Item = Move>) -> Vec<String> {
        moves.map(|mv| mv.to().to_string()).collect()
    }

    #[test]
    fn ray_runs_to_edge() {
        let board = Board::empty();
        let ray = probe(&board, sq("d4"), Color::White, Step::new(1, 0), true, false);
        assert_eq!(targets(ray), ["d5", "d6", "d7", "d8"]);
    }

    #[test]
    fn ray_stops_on_enemy_inclusive() {
        let mut board = Board::empty();
        board.put_piece(sq("d6"), Piece::BLACK_KNIGHT);
        board.put_piece(sq("d7"), Piece::BLACK_QUEEN);
        let ray = probe(&board, sq("d4"), Color::White, Step::new(1, 0), true, false);
        assert_eq!(targets(ray), ["d5", "d6"]);
    }

    #[test]
    fn ray_stops_before_friend() {
        let mut board = Board::empty();
        board.put_piece(sq("f6"), Piece::WHITE_PAWN);
        let ray = probe(&board, sq("d4"), Color::White, Step::new(1, 1), true, false);
        assert_eq!(targets(ray), ["e5"]);
    }

    #[test]
    fn single_step_does_not_repeat() {
        let board = Board::empty();
        let step = probe(&board, sq("d4"), Color::Black, Step::new(0, -1), false, false);
        assert_eq!(targets(step), ["c4"]);
    }

    #[test]
    fn off_board_step_yields_nothing() {
        let board = Board::empty();
        let step = probe(&board, sq("a1"), Color::White, Step::new(-2, 1), false, false);
        assert_eq!(step.count(), 0);
    }

    #[test]
    fn capture_only_skips_empty_squares() {
        let mut board = Board::empty();
        let step = probe(&board, sq("e4"), Color::White, Step::new(1, 1), false, true);
        assert_eq!(step.count(), 0);

        board.put_piece(sq("f5"), Piece::BLACK_ROOK);
        let step = probe(&board, sq("e4"), Color::White, Step::new(1, 1), false, true);
        assert_eq!(targets(step), ["f5"]);

        board.put_piece(sq("f5"), Piece::WHITE_ROOK);
        let step = probe(&board, sq("e4"), Color::White, Step::new(1, 1), false, true);
        assert_eq!(step.count(), 0);
    }

    #[test]
    fn capture_only_ray_finds_first_enemy() {
        let mut board = Board::empty();
        board.put_piece(sq("h4"), Piece::BLACK_KING);
        let ray = probe(&board, sq("a4"), Color::White, Step::new(0, 1), true, true);
        assert_eq!(targets(ray), ["h4"]);
    }

    #[test]
    fn moves_originate_from_start_square() {
        let board = Board::empty();
        let ray = probe(&board, sq("b2"), Color::White, Step::new(1, 1), true, false);
        assert!(ray.into_iter().all(|mv| mv.from() == sq("b2") && !mv.is_promotion()));
    }
}
