//! Core chess types and single-piece candidate move generation.
//!
//! Given a board and a square, [`generate_moves`] (or [`Piece::moves`]) returns
//! every square the piece can geometrically reach. Legality with respect to king
//! safety is left to the caller.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod movegen;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, BoardView, PrettyBoard};
pub use chess_move::{Move, PromotionPiece};
pub use color::Color;
pub use error::{FenError, MoveGenError};
pub use fen::STARTING_PLACEMENT;
pub use movegen::{MAX_PIECE_MOVES, MoveList, generate_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::{Square, in_bounds};
