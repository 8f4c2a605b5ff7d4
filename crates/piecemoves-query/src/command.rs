//! Query command parsing.

use piecemoves_core::{Board, Piece, Square};

use crate::error::QueryError;

/// A parsed query command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `startpos` -- reset to the standard starting layout.
    StartPos,
    /// `empty` -- remove every piece.
    Empty,
    /// `fen <placement> [...]` -- load a placement; trailing FEN fields are ignored.
    Fen(Board),
    /// `put <square> <piece>` -- place a piece, e.g. `put e4 N`.
    Put(Square, Piece),
    /// `remove <square>` -- clear a square.
    Remove(Square),
    /// `moves <square>` -- list candidate moves for the piece on a square.
    Moves(Square),
    /// `show` -- print the board.
    Show,
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, QueryError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "startpos" => Ok(Command::StartPos),
        "empty" => Ok(Command::Empty),
        "show" => Ok(Command::Show),
        "quit" => Ok(Command::Quit),
        "fen" => parse_fen(args),
        "put" => {
            let square = parse_square(args.first(), "put")?;
            let piece = parse_piece(args.get(1), "put")?;
            Ok(Command::Put(square, piece))
        }
        "remove" => Ok(Command::Remove(parse_square(args.first(), "remove")?)),
        "moves" => Ok(Command::Moves(parse_square(args.first(), "moves")?)),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

fn parse_fen(args: &[&str]) -> Result<Command, QueryError> {
    if args.is_empty() {
        return Err(QueryError::MissingArgument {
            command: "fen",
            argument: "placement",
        });
    }
    let board: Board = args.join(" ").parse()?;
    Ok(Command::Fen(board))
}

fn parse_square(token: Option<&&str>, command: &'static str) -> Result<Square, QueryError> {
    let value = token.ok_or(QueryError::MissingArgument {
        command,
        argument: "square",
    })?;
    Square::from_algebraic(value).ok_or_else(|| QueryError::InvalidSquare {
        value: value.to_string(),
    })
}

fn parse_piece(token: Option<&&str>, command: &'static str) -> Result<Piece, QueryError> {
    let value = token.ok_or(QueryError::MissingArgument {
        command,
        argument: "piece",
    })?;
    let mut chars = value.chars();
    let piece = match (chars.next(), chars.next()) {
        (Some(c), None) => Piece::from_fen_char(c),
        _ => None,
    };
    piece.ok_or_else(|| QueryError::InvalidPiece {
        value: value.to_string(),
    })
}
