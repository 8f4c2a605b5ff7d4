//! Query protocol errors.

use piecemoves_core::{FenError, MoveGenError};

/// Errors that can occur while handling a query command.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A command was given without an argument it requires.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },

    /// A square argument is not an algebraic coordinate.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The token that failed to parse.
        value: String,
    },

    /// A piece argument is not a single FEN piece letter.
    #[error("invalid piece: {value}")]
    InvalidPiece {
        /// The token that failed to parse.
        value: String,
    },

    /// The placement given to `fen` could not be parsed.
    #[error("invalid FEN: {source}")]
    InvalidFen {
        #[from]
        source: FenError,
    },

    /// Move generation refused the query.
    #[error(transparent)]
    MoveGen(#[from] MoveGenError),

    /// An I/O error occurred while reading commands or writing responses.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
